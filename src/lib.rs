//! # SaaS Gateway
//!
//! A small token-protected HTTP gateway built with Axum that proxies a joke
//! API and a historical weather API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Validated request types and provider traits
//! - **Application Layer** ([`application`]) - Validation and orchestration services
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` clients for the upstream APIs
//! - **API Layer** ([`api`]) - Handlers, response DTOs and middleware
//!
//! ## Request Flow
//!
//! 1. A handler receives the raw JSON body
//! 2. The service validates it ([`application::services::RequestValidator`])
//! 3. The configured provider calls the upstream API
//! 4. The handler renders the response envelope; any [`AppError`] is
//!    rendered as `{"message": ...}` with its status code
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables (optionally
//! seeded from an env file) via [`config::Config`]. See [`config`] for the
//! available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{JokeService, RequestValidator, WeatherService};
    pub use crate::config::{Config, WeatherProviderKind};
    pub use crate::domain::{EnvelopeStyle, JokeQuery, WeatherQuery};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
