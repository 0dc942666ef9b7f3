//! Provider trait for joke generation.

use crate::domain::JokeQuery;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Source of random jokes.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::RsaJokeClient`] - RSA joke API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JokeProvider: Send + Sync {
    /// Fetches one joke, honouring the optional exclusion filter.
    ///
    /// Performs exactly one upstream request and returns its JSON body
    /// unmodified.
    ///
    /// # Errors
    ///
    /// - [`AppError::Upstream`] if the upstream answers with a non-2xx status
    /// - [`AppError::UpstreamUnavailable`] on transport failures
    /// - [`AppError::InvalidUpstreamBody`] if the body is not JSON
    async fn random_joke(&self, query: &JokeQuery) -> Result<Value, AppError>;
}
