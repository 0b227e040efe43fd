//! # account-client
//!
//! Session layer for the account frontend: the current user's profile
//! fields and bearer token, derived queries (authentication status,
//! gravatar URL), and the four account API actions (login, signup, save,
//! fetch). The store restores a persisted session on construction and
//! mirrors every token change back to storage.
//!
//! Browser-only code (HTTP, localStorage, wall clock) is gated behind the
//! `hydrate` feature; everything that decides *what* happens to the state
//! is plain Rust and runs natively.

pub mod error;
pub mod net;
pub mod state;
pub mod store;
pub mod util;
