//! Client for the Meteosource weather API (via RapidAPI).

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;

use super::http::UpstreamClient;
use crate::domain::providers::WeatherProvider;
use crate::domain::{EnvelopeStyle, WeatherQuery};
use crate::error::AppError;

/// Weather provider resolving a place first, then fetching history.
///
/// 1. `GET {base}/find_places?text=<location>` → first entry's `place_id`
/// 2. `GET {base}/historical_weather?place_id=<id>&date=<date>&units=metric`
///
/// The second request depends on the first, so both run strictly in
/// sequence. Place ids are not cached between requests.
pub struct MeteosourceClient {
    http: UpstreamClient,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl MeteosourceClient {
    pub fn new(
        http: UpstreamClient,
        base_url: &str,
        api_key: impl Into<String>,
        api_host: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            api_host: api_host.into(),
        }
    }

    fn headers(&self) -> [(&str, &str); 2] {
        [
            ("X-RapidAPI-Key", self.api_key.as_str()),
            ("X-RapidAPI-Host", self.api_host.as_str()),
        ]
    }

    /// Resolves free-text `location` to a place identifier.
    ///
    /// # Errors
    ///
    /// - `LocationLookup` with the upstream status and `"Bad location"` when
    ///   the lookup does not answer 200
    /// - `LocationLookup` with 404 and `"Could not find location"` when no
    ///   place matches or the first match has no `place_id`
    pub async fn find_place_id(&self, location: &str) -> Result<String, AppError> {
        let url = format!("{}/find_places", self.base_url);
        let response = self
            .http
            .get(&url, &[("text", location)], &self.headers())
            .await?;

        if response.status != StatusCode::OK {
            tracing::info!(status = %response.status, location, "Place lookup rejected");
            return Err(AppError::bad_location(response.status));
        }

        let places = response.json()?;
        let place_id = places
            .as_array()
            .and_then(|places| places.first())
            .and_then(|place| place.get("place_id"))
            .and_then(place_id_text)
            .ok_or_else(AppError::location_not_found)?;

        tracing::debug!(location, place_id = %place_id, "Resolved place");
        Ok(place_id)
    }
}

/// Place ids are normally strings; numbers are accepted verbatim.
fn place_id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[async_trait]
impl WeatherProvider for MeteosourceClient {
    #[tracing::instrument(skip(self, query), fields(location = %query.location, date = %query.date))]
    async fn weather(&self, query: &WeatherQuery) -> Result<Value, AppError> {
        let place_id = self.find_place_id(&query.location).await?;
        let date = query.date_string();

        let url = format!("{}/historical_weather", self.base_url);
        let response = self
            .http
            .get(
                &url,
                &[
                    ("place_id", place_id.as_str()),
                    ("date", date.as_str()),
                    ("units", "metric"),
                ],
                &self.headers(),
            )
            .await?
            .error_for_status()?;

        response.json()
    }

    fn envelope_style(&self) -> EnvelopeStyle {
        EnvelopeStyle::Timestamped
    }
}
