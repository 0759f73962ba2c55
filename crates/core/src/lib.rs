//! Core logic for schedboard: the in-memory session store, the role-based
//! view projection, and the credential-table authentication boundary.
//!
//! Everything in this crate is synchronous and side-effect free apart from
//! tracing output; I/O and state sharing live in the `schedboard` crate.

pub mod auth;
pub mod roles;
pub mod serde;
pub mod session;
