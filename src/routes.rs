//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                                     - Greeting page
//! - `POST /content/api/v1/integration/generate`  - Joke
//! - `POST /weather` *or* `/content/api/v1/integration/weather` - Weather
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::home_handler;
use crate::api::middleware::tracing;
use crate::config::WeatherProviderKind;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Router with every route and the tracing layer, without path normalization.
pub fn router(state: AppState, provider: WeatherProviderKind) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .merge(api::routes::routes(provider))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `provider` - configured weather provider; selects the weather route
pub fn app_router(state: AppState, provider: WeatherProviderKind) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, provider))
}
