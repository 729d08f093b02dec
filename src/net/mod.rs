//! Identity-service wire contract and exchanges.
//!
//! `types` pins the request/response field names, `api` performs the
//! raw HTTP calls, and `auth_client` orchestrates exchanges against
//! the token store and session signal.

pub mod api;
pub mod auth_client;
pub mod error;
pub mod types;
