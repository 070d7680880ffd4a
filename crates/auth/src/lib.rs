//! `aeroops-auth` — pure permission/session-token model.
//!
//! This crate is intentionally decoupled from HTTP and storage: role
//! derivation, the capability matrix, and token-validity checks are all
//! deterministic functions over values the caller already holds.

pub mod matrix;
pub mod profile;
pub mod role;
pub mod section;
pub mod tokens;

pub use matrix::{can, can_crud, can_view};
pub use profile::{UserGroup, UserProfile};
pub use role::Role;
pub use section::{Action, Section};
pub use tokens::SessionTokens;
