mod error;
mod fixture;
mod store;
mod types;

pub use error::FixtureError;
pub use fixture::{Fixture, SessionRecord};
pub use store::{SessionStore, WriteOutcome};
pub use types::{EventId, SessionEvent};
