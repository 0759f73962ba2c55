mod error;
mod filter;
mod types;

pub use error::RoleError;
pub use filter::select_events;
pub use types::Role;
