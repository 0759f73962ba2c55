use thiserror::Error;

/// Errors that can occur when checking credentials.
///
/// The variants distinguish which form field failed so the login form can
/// show the message next to the offending input. Never retried
/// automatically; the user resubmits.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username")]
    InvalidUsername,

    #[error("invalid password")]
    InvalidPassword,
}
