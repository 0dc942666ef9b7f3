//! Shared application state injected into every handler.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::application::services::{JokeService, RequestValidator, WeatherService};
use crate::config::{Config, WeatherProviderKind};
use crate::domain::providers::{JokeProvider, WeatherProvider};
use crate::infrastructure::upstream::{
    MeteosourceClient, RsaJokeClient, UpstreamClient, VisualCrossingClient,
};

/// Immutable per-process state.
///
/// Built once at startup; cloning only bumps reference counts. Nothing in
/// here is mutated while requests are served.
#[derive(Clone)]
pub struct AppState {
    pub joke_service: Arc<JokeService>,
    pub weather_service: Arc<WeatherService>,
}

impl AppState {
    /// Wires services from explicit providers.
    ///
    /// Used by [`Self::from_config`] and by tests that plug in stub providers.
    pub fn new(
        api_token: &str,
        joke_provider: Arc<dyn JokeProvider>,
        weather_provider: Arc<dyn WeatherProvider>,
    ) -> Self {
        let validator = RequestValidator::new(api_token);

        Self {
            joke_service: Arc::new(JokeService::new(validator.clone(), joke_provider)),
            weather_service: Arc::new(WeatherService::new(validator, weather_provider)),
        }
    }

    /// Builds the HTTP clients for the configured upstreams.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized or an
    /// upstream base URL is unusable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = UpstreamClient::new().context("Failed to build upstream HTTP client")?;

        let joke_provider: Arc<dyn JokeProvider> = Arc::new(RsaJokeClient::new(
            http.clone(),
            &config.joke_api_base_url,
            config.joke_api_key.clone(),
        ));

        let weather_provider: Arc<dyn WeatherProvider> = match config.weather_provider {
            WeatherProviderKind::Meteosource => Arc::new(MeteosourceClient::new(
                http,
                &config.meteosource_base_url,
                config.rapidapi_key.clone(),
                config.rapidapi_host.clone(),
            )),
            WeatherProviderKind::VisualCrossing => Arc::new(
                VisualCrossingClient::new(
                    http,
                    &config.visual_crossing_base_url,
                    config.visual_crossing_api_key.clone(),
                )
                .context("Invalid VISUAL_CROSSING_BASE_URL")?,
            ),
        };

        Ok(Self::new(&config.api_token, joke_provider, weather_provider))
    }
}
