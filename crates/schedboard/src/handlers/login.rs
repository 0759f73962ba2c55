//! Login gate handlers.

use schedboard_core::auth::{AuthError, AuthSession, AuthToken};

use crate::state::AppState;

impl AppState {
    /// Checks credentials and stores the login session on success.
    ///
    /// Errors are field-specific so the form can render them next to the
    /// offending input; the user resubmits, nothing is retried here.
    pub fn login(&self, username: &str, password: &str) -> Result<AuthToken, AuthError> {
        let session = self.credentials().authenticate(username, password)?;
        let token = session.token.clone();
        tracing::info!(username = %session.username, "User logged in");
        *self.session_cell().write().expect("Lock poisoned") = Some(session);
        Ok(token)
    }

    /// Drops the login session; `visible_events` is gated again afterwards.
    pub fn logout(&self) {
        let mut session = self.session_cell().write().expect("Lock poisoned");
        if session.take().is_some() {
            tracing::info!("User logged out");
        }
    }

    /// True once a login token exists.
    pub fn is_authenticated(&self) -> bool {
        self.session_cell().read().expect("Lock poisoned").is_some()
    }

    /// The current login session, if any.
    pub fn auth_session(&self) -> Option<AuthSession> {
        self.session_cell().read().expect("Lock poisoned").clone()
    }
}
