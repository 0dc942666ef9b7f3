#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use saas_gateway::config::WeatherProviderKind;
use saas_gateway::infrastructure::upstream::{
    MeteosourceClient, RsaJokeClient, UpstreamClient, VisualCrossingClient,
};
use saas_gateway::routes::{app_router, router};
use saas_gateway::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::MockServer;

pub const API_TOKEN: &str = "test-api-token";
pub const JOKE_API_KEY: &str = "test-joke-key";
pub const RAPIDAPI_KEY: &str = "test-rapid-key";
pub const RAPIDAPI_HOST: &str = "weather.test";
pub const VISUAL_CROSSING_KEY: &str = "test-vc-key";

/// Builds application state whose joke and weather providers both point at `base_uri`.
///
/// Joke requests hit `/joke/random`; Meteosource requests hit `/find_places`
/// and `/historical_weather`; Visual Crossing requests hit `/timeline/...`.
pub fn create_test_state(base_uri: &str, provider: WeatherProviderKind) -> AppState {
    let http = UpstreamClient::new().unwrap();

    let joke = Arc::new(RsaJokeClient::new(http.clone(), base_uri, JOKE_API_KEY));

    match provider {
        WeatherProviderKind::Meteosource => AppState::new(
            API_TOKEN,
            joke,
            Arc::new(MeteosourceClient::new(
                http,
                base_uri,
                RAPIDAPI_KEY,
                RAPIDAPI_HOST,
            )),
        ),
        WeatherProviderKind::VisualCrossing => AppState::new(
            API_TOKEN,
            joke,
            Arc::new(
                VisualCrossingClient::new(
                    http,
                    &format!("{}/timeline", base_uri),
                    VISUAL_CROSSING_KEY,
                )
                .unwrap(),
            ),
        ),
    }
}

pub fn create_test_server(upstream: &MockServer, provider: WeatherProviderKind) -> TestServer {
    let state = create_test_state(&upstream.uri(), provider);
    TestServer::new(router(state, provider)).unwrap()
}

/// Test server over the full production service, path normalization included.
pub fn create_app_server(upstream: &MockServer, provider: WeatherProviderKind) -> TestServer {
    let state = create_test_state(&upstream.uri(), provider);
    let app = app_router(state, provider);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Base URI of a local port with nothing listening on it.
pub fn unreachable_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn weather_body() -> Value {
    json!({
        "token": API_TOKEN,
        "requester_name": "Jane Doe",
        "location": "Kyiv",
        "date": "2024-03-01"
    })
}
