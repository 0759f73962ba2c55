//! View projection and role selection.

use schedboard_core::roles::{select_events, Role};
use schedboard_core::session::SessionEvent;

use crate::error::ViewError;
use crate::state::AppState;

impl AppState {
    /// The currently selected viewer role.
    pub fn viewer(&self) -> Role {
        *self.viewer_cell().read().expect("Lock poisoned")
    }

    /// Selects the viewer role used by [`AppState::visible_events`].
    pub fn set_viewer(&self, role: Role) {
        *self.viewer_cell().write().expect("Lock poisoned") = role;
        tracing::debug!(role = %role, "Viewer role selected");
    }

    /// The events visible to the current viewer, in store order.
    ///
    /// Recomputed on every call so the projection always reflects the
    /// latest store contents. Gated: errors until a login token exists.
    pub fn visible_events(&self) -> Result<Vec<SessionEvent>, ViewError> {
        if !self.is_authenticated() {
            return Err(ViewError::NotAuthenticated);
        }

        let store = self.store();
        Ok(select_events(store.events(), self.viewer()))
    }
}
