//! Provider trait for historical weather lookups.

use crate::domain::{EnvelopeStyle, WeatherQuery};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Source of historical weather data.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::MeteosourceClient`] - place lookup
///   followed by a historical weather request (two calls)
/// - [`crate::infrastructure::upstream::VisualCrossingClient`] - single
///   timeline request
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches weather for `query.location` on `query.date`.
    ///
    /// Returns the upstream JSON body unmodified.
    ///
    /// # Errors
    ///
    /// - [`AppError::LocationLookup`] if the location cannot be resolved
    /// - [`AppError::Upstream`] if a weather request answers with a non-2xx status
    /// - [`AppError::UpstreamUnavailable`] on transport failures
    /// - [`AppError::InvalidUpstreamBody`] if a body is not JSON
    async fn weather(&self, query: &WeatherQuery) -> Result<Value, AppError>;

    /// Response envelope used together with this provider.
    fn envelope_style(&self) -> EnvelopeStyle;
}
