use rand::{distr::Alphanumeric, Rng};

use super::AuthToken;

/// Generate a random opaque login token.
pub fn generate_token() -> AuthToken {
    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    AuthToken::new(token)
}
