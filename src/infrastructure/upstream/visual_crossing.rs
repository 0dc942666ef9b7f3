//! Client for the Visual Crossing timeline weather API.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::http::UpstreamClient;
use crate::domain::providers::WeatherProvider;
use crate::domain::{EnvelopeStyle, WeatherQuery};
use crate::error::AppError;

const TIMEZONE: &str = "Europe/Kyiv";
const LANGUAGE: &str = "uk";
const ELEMENTS: &str = "datetime,temp,windspeed,pressure,humidity";

/// Weather provider issuing a single `GET {base}/{location}/{date}`.
///
/// The location is sent as a path segment (percent-encoded), so no separate
/// place lookup is needed.
pub struct VisualCrossingClient {
    http: UpstreamClient,
    base_url: Url,
    api_key: String,
}

impl VisualCrossingClient {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL that can carry
    /// path segments.
    pub fn new(
        http: UpstreamClient,
        base_url: &str,
        api_key: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("'{}' cannot be used as a base URL", base_url);
        }

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn timeline_url(&self, location: &str, date: &str) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::internal("weather base URL cannot carry a path"))?
            .pop_if_empty()
            .push(location)
            .push(date);
        Ok(url)
    }
}

#[async_trait]
impl WeatherProvider for VisualCrossingClient {
    #[tracing::instrument(skip(self, query), fields(location = %query.location, date = %query.date))]
    async fn weather(&self, query: &WeatherQuery) -> Result<Value, AppError> {
        let url = self.timeline_url(&query.location, &query.date_string())?;

        let response = self
            .http
            .get(
                url.as_str(),
                &[
                    ("key", self.api_key.as_str()),
                    ("timezone", TIMEZONE),
                    ("contentType", "json"),
                    ("lang", LANGUAGE),
                    ("unitGroup", "metric"),
                    ("elements", ELEMENTS),
                ],
                &[],
            )
            .await?
            .error_for_status()?;

        response.json()
    }

    fn envelope_style(&self) -> EnvelopeStyle {
        EnvelopeStyle::Dated
    }
}
