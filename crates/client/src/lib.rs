//! `aeroops-client` — typed client for the aviation-operations REST API.
//!
//! Every data operation is a thin pass-through to the remote API; the client
//! holds no durable state beyond the session (tokens + cached profile) kept
//! in an explicit [`store::SessionStore`].

pub mod auth;
pub mod client;
pub mod error;
pub mod pagination;
pub mod resources;
pub mod store;

pub use auth::{AuthApi, Credentials, LoginResponse};
pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use pagination::{ListQuery, Page};
pub use store::{FileStore, MemoryStore, SessionData, SessionStore};
