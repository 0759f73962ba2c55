use thiserror::Error;

/// Errors that can occur when resolving a viewer role.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoleError {
    #[error("unrecognized role: {0}")]
    Unrecognized(String),
}
