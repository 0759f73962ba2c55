//! Shared application state.
//!
//! Everything mutable behind the calendar UI has exactly one owner: the
//! event store, the selected viewer role, and the login session all live
//! here, never in ambient globals. Handlers in this crate are the only
//! writers.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use schedboard_core::auth::{AuthSession, CredentialTable};
use schedboard_core::roles::Role;
use schedboard_core::session::{Fixture, SessionStore};

use crate::demo;

/// Shared state behind the calendar UI.
///
/// Cloning is cheap and shares the same underlying cells; every clone
/// observes the same store, viewer role, and login session. All handler
/// work is synchronous inside UI callbacks, so the locks only exist to
/// keep a multi-threaded embedding honest: single writer, short critical
/// sections.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<SessionStore>>,
    viewer: Arc<RwLock<Role>>,
    session: Arc<RwLock<Option<AuthSession>>>,
    credentials: Arc<CredentialTable>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state with an empty store, the default viewer role, and the
    /// built-in credential table.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(SessionStore::new())),
            viewer: Arc::new(RwLock::new(Role::default())),
            session: Arc::new(RwLock::new(None)),
            credentials: Arc::new(CredentialTable::default()),
        }
    }

    /// Creates state pre-loaded with the bundled demo timetable.
    pub fn with_demo_data() -> Self {
        let state = Self::new();
        state.load_fixture(demo::default_fixture());
        state
    }

    /// Replaces the built-in credential table.
    pub fn with_credentials(mut self, credentials: CredentialTable) -> Self {
        self.credentials = Arc::new(credentials);
        self
    }

    /// Loads a parsed fixture into the store.
    ///
    /// Re-loading is a full reset: event ids are reassigned and prior
    /// mutations are discarded.
    pub fn load_fixture(&self, fixture: Fixture) {
        self.store_mut().load(fixture.sessions);
    }

    pub(crate) fn store(&self) -> RwLockReadGuard<'_, SessionStore> {
        self.store.read().expect("Lock poisoned")
    }

    pub(crate) fn store_mut(&self) -> RwLockWriteGuard<'_, SessionStore> {
        self.store.write().expect("Lock poisoned")
    }

    pub(crate) fn viewer_cell(&self) -> &RwLock<Role> {
        &self.viewer
    }

    pub(crate) fn session_cell(&self) -> &RwLock<Option<AuthSession>> {
        &self.session
    }

    pub(crate) fn credentials(&self) -> &CredentialTable {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty_and_defaults_to_admin() {
        let state = AppState::new();

        assert!(state.store().is_empty());
        assert_eq!(state.viewer(), Role::Admin);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_demo_data_loads_bundled_timetable() {
        let state = AppState::with_demo_data();
        assert!(!state.store().is_empty());
    }

    #[test]
    fn test_clones_share_the_same_store() {
        let state = AppState::with_demo_data();
        let other = state.clone();

        let before = other.store().len();
        state.store_mut().create_event(
            chrono::NaiveDate::from_ymd_opt(2022, 1, 21)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            chrono::NaiveDate::from_ymd_opt(2022, 1, 21)
                .unwrap()
                .and_hms_opt(13, 0, 0)
                .unwrap(),
            "Extra session",
        );

        assert_eq!(other.store().len(), before + 1);
    }

    #[test]
    fn test_reload_resets_mutations() {
        let state = AppState::with_demo_data();
        let original_len = state.store().len();
        state.store_mut().create_event(
            chrono::NaiveDate::from_ymd_opt(2022, 1, 21)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            chrono::NaiveDate::from_ymd_opt(2022, 1, 21)
                .unwrap()
                .and_hms_opt(13, 0, 0)
                .unwrap(),
            "Extra session",
        );

        state.load_fixture(crate::demo::default_fixture());

        assert_eq!(state.store().len(), original_len);
    }
}
