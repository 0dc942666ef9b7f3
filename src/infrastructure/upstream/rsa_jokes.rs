//! Client for the RSA random joke API.

use async_trait::async_trait;
use serde_json::Value;

use super::http::UpstreamClient;
use crate::domain::JokeQuery;
use crate::domain::providers::JokeProvider;
use crate::error::AppError;

/// Joke provider backed by `GET {base}/joke/random`.
///
/// Authenticates with the raw API key in the `Authorization` header and adds
/// `exclude=<category>` only when the query carries a filter.
pub struct RsaJokeClient {
    http: UpstreamClient,
    endpoint: String,
    api_key: String,
}

impl RsaJokeClient {
    pub fn new(http: UpstreamClient, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: format!("{}/joke/random", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl JokeProvider for RsaJokeClient {
    #[tracing::instrument(skip(self))]
    async fn random_joke(&self, query: &JokeQuery) -> Result<Value, AppError> {
        let params: Vec<(&str, &str)> = query
            .exclude
            .as_deref()
            .map(|exclude| vec![("exclude", exclude)])
            .unwrap_or_default();

        let response = self
            .http
            .get(
                &self.endpoint,
                &params,
                &[("Authorization", self.api_key.as_str())],
            )
            .await?
            .error_for_status()?;

        response.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

    fn client(server: &MockServer) -> RsaJokeClient {
        RsaJokeClient::new(UpstreamClient::new().unwrap(), &server.uri(), "rsa-key")
    }

    #[tokio::test]
    async fn test_random_joke_without_filter() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("GET"))
            .and(matchers::path("/joke/random"))
            .and(matchers::header("Authorization", "rsa-key"))
            .and(matchers::query_param_is_missing("exclude"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"joke": "knock knock"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let joke = client(&mock_server)
            .random_joke(&JokeQuery::default())
            .await
            .unwrap();

        assert_eq!(joke, json!({"joke": "knock knock"}));
    }

    #[tokio::test]
    async fn test_random_joke_with_filter() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("GET"))
            .and(matchers::path("/joke/random"))
            .and(matchers::query_param("exclude", "nsfw"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"joke": "clean"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let joke = client(&mock_server)
            .random_joke(&JokeQuery::new(Some("nsfw".to_string())))
            .await
            .unwrap();

        assert_eq!(joke["joke"], "clean");
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let client = RsaJokeClient::new(
            UpstreamClient::new().unwrap(),
            "https://v6.rsa-api.xyz/",
            "k",
        );
        assert_eq!(client.endpoint, "https://v6.rsa-api.xyz/joke/random");
    }

    #[tokio::test]
    async fn test_upstream_error_status_is_mirrored() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .random_joke(&JokeQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Upstream { .. }));
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }
}
