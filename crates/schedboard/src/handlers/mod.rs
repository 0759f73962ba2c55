//! Interaction handlers, split by concern: calendar mutations, the login
//! gate, and the view projection. Each handler runs synchronously inside
//! the UI callback that triggered it.

mod events;
mod login;
mod view;

pub use events::{DropAction, ResizeAction, SlotSelection};
