//! API route configuration.
//!
//! Authorization is done per request from the `token` body field by
//! [`crate::application::services::RequestValidator`], so no auth layer is
//! attached here.

use crate::api::handlers::{joke_handler, weather_handler};
use crate::config::WeatherProviderKind;
use crate::state::AppState;
use axum::{Router, routing::post};

pub const JOKE_PATH: &str = "/content/api/v1/integration/generate";
pub const METEOSOURCE_WEATHER_PATH: &str = "/weather";
pub const VISUAL_CROSSING_WEATHER_PATH: &str = "/content/api/v1/integration/weather";

/// Route the weather endpoint is mounted at for a given provider.
pub fn weather_path(provider: WeatherProviderKind) -> &'static str {
    match provider {
        WeatherProviderKind::Meteosource => METEOSOURCE_WEATHER_PATH,
        WeatherProviderKind::VisualCrossing => VISUAL_CROSSING_WEATHER_PATH,
    }
}

/// Joke and weather endpoints.
///
/// # Endpoints
///
/// - `POST /content/api/v1/integration/generate` - Random joke
/// - `POST /weather` or `POST /content/api/v1/integration/weather` - Weather,
///   depending on `provider`
pub fn routes(provider: WeatherProviderKind) -> Router<AppState> {
    Router::new()
        .route(JOKE_PATH, post(joke_handler))
        .route(weather_path(provider), post(weather_handler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_path_per_provider() {
        assert_eq!(weather_path(WeatherProviderKind::Meteosource), "/weather");
        assert_eq!(
            weather_path(WeatherProviderKind::VisualCrossing),
            "/content/api/v1/integration/weather"
        );
    }
}
