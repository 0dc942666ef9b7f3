//! Joke generation service.

use chrono::Local;
use serde_json::Value;
use std::sync::Arc;

use crate::application::services::RequestValidator;
use crate::domain::JokeEvent;
use crate::domain::providers::JokeProvider;
use crate::error::AppError;

/// Validates joke requests and times the upstream call.
pub struct JokeService {
    validator: RequestValidator,
    provider: Arc<dyn JokeProvider>,
}

impl JokeService {
    pub fn new(validator: RequestValidator, provider: Arc<dyn JokeProvider>) -> Self {
        Self {
            validator,
            provider,
        }
    }

    /// Generates one joke for a raw request body.
    ///
    /// The start time is taken before validation and the finish time after
    /// the upstream answered, so the reported duration covers the whole
    /// request. Exactly one upstream call is made, and only once validation
    /// passed.
    ///
    /// # Errors
    ///
    /// Returns validation errors from [`RequestValidator::validate_joke`] or
    /// upstream errors from the [`JokeProvider`].
    pub async fn generate(&self, body: &Value) -> Result<JokeEvent, AppError> {
        let started_at = Local::now();

        let query = self.validator.validate_joke(body)?;
        let joke = self.provider.random_joke(&query).await?;

        let finished_at = Local::now();

        tracing::info!(
            exclude = query.exclude.as_deref().unwrap_or(""),
            duration_ms = (finished_at - started_at).num_milliseconds(),
            "Joke generated"
        );

        Ok(JokeEvent {
            started_at,
            finished_at,
            joke,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::MockJokeProvider;
    use serde_json::json;

    fn service(provider: MockJokeProvider) -> JokeService {
        JokeService::new(RequestValidator::new("secret"), Arc::new(provider))
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mut mock_provider = MockJokeProvider::new();

        mock_provider
            .expect_random_joke()
            .withf(|query| query.exclude.is_none())
            .times(1)
            .returning(|_| Ok(json!({"joke": "ha"})));

        let event = service(mock_provider)
            .generate(&json!({"token": "secret"}))
            .await
            .unwrap();

        assert_eq!(event.joke, json!({"joke": "ha"}));
        assert!(event.finished_at >= event.started_at);
        assert!(event.duration() >= chrono::TimeDelta::zero());
    }

    #[tokio::test]
    async fn test_generate_passes_exclude() {
        let mut mock_provider = MockJokeProvider::new();

        mock_provider
            .expect_random_joke()
            .withf(|query| query.exclude.as_deref() == Some("nsfw"))
            .times(1)
            .returning(|_| Ok(json!({})));

        let result = service(mock_provider)
            .generate(&json!({"token": "secret", "exclude": "nsfw"}))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_token_skips_upstream() {
        let mut mock_provider = MockJokeProvider::new();
        mock_provider.expect_random_joke().times(0);

        let result = service(mock_provider)
            .generate(&json!({"token": "wrong"}))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidToken));
    }

    #[tokio::test]
    async fn test_upstream_error_propagates() {
        let mut mock_provider = MockJokeProvider::new();

        mock_provider.expect_random_joke().times(1).returning(|_| {
            Err(AppError::Upstream {
                status: axum::http::StatusCode::SERVICE_UNAVAILABLE,
            })
        });

        let result = service(mock_provider)
            .generate(&json!({"token": "secret"}))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Upstream { .. }));
    }
}
