use serde::{Deserialize, Serialize};

/// Opaque login token.
///
/// Presence of a token is the whole contract: no session content is shown
/// until one exists. There is no expiry and no server-side registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One username/password/group row in the fixed credential table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
    /// Account group label. Distinct from the viewer [`Role`] selection:
    /// logging in does not pick what the calendar shows.
    ///
    /// [`Role`]: crate::roles::Role
    pub group: String,
}

/// A successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: AuthToken,
    pub username: String,
    pub group: String,
}
