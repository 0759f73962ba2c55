use thiserror::Error;

/// Errors surfaced to the rendering layer by state queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// No login token is present; session content stays hidden.
    #[error("not authenticated")]
    NotAuthenticated,
}
