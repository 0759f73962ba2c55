//! Controller layer for schedboard.
//!
//! Owns the shared application state behind the calendar UI (event store,
//! viewer role, login session) and exposes the synchronous interaction
//! handlers a rendering layer calls: drag-drop, resize, slot selection,
//! login/logout, and the auth-gated view projection. Rendering itself is
//! out of scope; this crate ends where the widget boundary begins.

mod demo;
mod error;
mod handlers;
mod prompt;
mod state;

pub use error::ViewError;
pub use handlers::{DropAction, ResizeAction, SlotSelection};
pub use prompt::TitlePrompt;
pub use state::AppState;

// Re-export the core surface consumers need alongside the handlers.
pub use schedboard_core::auth::{AuthError, AuthSession, AuthToken};
pub use schedboard_core::roles::{Role, RoleError};
pub use schedboard_core::session::{EventId, Fixture, FixtureError, SessionEvent, WriteOutcome};
