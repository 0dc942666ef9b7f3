//! Infrastructure layer for external integrations.
//!
//! This layer implements the provider traits defined by the domain layer,
//! talking to the third-party joke and weather APIs over HTTP.
//!
//! # Modules
//!
//! - [`upstream`] - `reqwest`-based upstream API clients

pub mod upstream;
