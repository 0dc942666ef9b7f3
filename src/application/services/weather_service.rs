//! Weather lookup service.

use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

use crate::application::services::RequestValidator;
use crate::domain::WeatherReport;
use crate::domain::providers::WeatherProvider;
use crate::error::AppError;

/// Validates weather requests and fetches weather from the configured provider.
pub struct WeatherService {
    validator: RequestValidator,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(validator: RequestValidator, provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            validator,
            provider,
        }
    }

    /// Fetches weather for a raw request body.
    ///
    /// The provider is only called once every field has been validated.
    ///
    /// # Errors
    ///
    /// Returns validation errors from [`RequestValidator::validate_weather`]
    /// or lookup/upstream errors from the [`WeatherProvider`].
    pub async fn report(&self, body: &Value) -> Result<WeatherReport, AppError> {
        let query = self.validator.validate_weather(body)?;
        let weather = self.provider.weather(&query).await?;

        tracing::info!(
            location = %query.location,
            date = %query.date,
            "Weather fetched"
        );

        Ok(WeatherReport {
            query,
            fetched_at: Utc::now(),
            weather,
            style: self.provider.envelope_style(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EnvelopeStyle;
    use crate::domain::providers::MockWeatherProvider;
    use axum::http::StatusCode;
    use serde_json::json;

    fn service(provider: MockWeatherProvider) -> WeatherService {
        WeatherService::new(RequestValidator::new("secret"), Arc::new(provider))
    }

    fn body() -> Value {
        json!({
            "token": "secret",
            "requester_name": "Jane Doe",
            "location": "Kyiv",
            "date": "2024-03-01"
        })
    }

    #[tokio::test]
    async fn test_report_success() {
        let mut mock_provider = MockWeatherProvider::new();

        mock_provider
            .expect_weather()
            .withf(|query| query.location == "Kyiv" && query.date_string() == "2024-03-01")
            .times(1)
            .returning(|_| Ok(json!({"temp": 3.5})));
        mock_provider
            .expect_envelope_style()
            .return_const(EnvelopeStyle::Timestamped);

        let report = service(mock_provider).report(&body()).await.unwrap();

        assert_eq!(report.query.requester_name, "Jane Doe");
        assert_eq!(report.weather, json!({"temp": 3.5}));
        assert_eq!(report.style, EnvelopeStyle::Timestamped);
    }

    #[tokio::test]
    async fn test_invalid_body_skips_upstream() {
        let mut mock_provider = MockWeatherProvider::new();
        mock_provider.expect_weather().times(0);

        let mut invalid = body();
        invalid["requester_name"] = json!("Jane");

        let err = service(mock_provider).report(&invalid).await.unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_location_not_found_propagates() {
        let mut mock_provider = MockWeatherProvider::new();

        mock_provider
            .expect_weather()
            .times(1)
            .returning(|_| Err(AppError::location_not_found()));

        let err = service(mock_provider).report(&body()).await.unwrap_err();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Could not find location");
    }
}
