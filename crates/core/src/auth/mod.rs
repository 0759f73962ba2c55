mod error;
mod functions;
mod table;
mod types;

pub use error::AuthError;
pub use functions::generate_token;
pub use table::CredentialTable;
pub use types::{AuthSession, AuthToken, Credential};
