use super::functions::generate_token;
use super::{AuthError, AuthSession, Credential};

/// Fixed username/password table standing in for a real identity provider.
///
/// The only contract the rest of the system relies on is that a successful
/// check yields a token; everything else (expiry, hashing, multi-session
/// handling) is out of scope for this boundary.
#[derive(Debug, Clone)]
pub struct CredentialTable {
    credentials: Vec<Credential>,
}

impl CredentialTable {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    /// Checks a username/password pair against the table.
    ///
    /// The username is resolved first so the login form can surface a
    /// field-specific message; only then is the password compared.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<AuthSession, AuthError> {
        let credential = self
            .credentials
            .iter()
            .find(|credential| credential.username == username)
            .ok_or(AuthError::InvalidUsername)?;

        if credential.password != password {
            return Err(AuthError::InvalidPassword);
        }

        tracing::debug!(username = %credential.username, group = %credential.group, "Login accepted");
        Ok(AuthSession {
            token: generate_token(),
            username: credential.username.clone(),
            group: credential.group.clone(),
        })
    }
}

impl Default for CredentialTable {
    /// The built-in demo accounts.
    fn default() -> Self {
        let account = |username: &str, password: &str, group: &str| Credential {
            username: username.to_string(),
            password: password.to_string(),
            group: group.to_string(),
        };

        Self::new(vec![
            account("admin", "admin", "Admin"),
            account("teacher", "teacher", "Teacher"),
            account("novia1", "novia1", "Novia1Student"),
        ])
    }
}
