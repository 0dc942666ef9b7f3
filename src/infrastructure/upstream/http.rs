//! Shared HTTP transport for upstream calls.

use axum::http::StatusCode;
use serde_json::Value;
use std::time::Instant;

use crate::error::AppError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Longest slice of an upstream error body written to the logs.
const MAX_LOGGED_BODY: usize = 512;

/// Thin wrapper over a pooled `reqwest::Client`.
///
/// Cloning is cheap and shares the connection pool. Timeouts are left at the
/// transport defaults.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

/// Raw upstream answer: status plus undecoded body.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

impl UpstreamClient {
    /// Builds the shared client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamUnavailable`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, AppError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { client })
    }

    /// Issues exactly one GET request.
    ///
    /// Any status is returned as-is; callers decide which ones are failures.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpstreamUnavailable`] if the request cannot be sent
    /// or the body cannot be read.
    pub async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<UpstreamResponse, AppError> {
        let started = Instant::now();

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.inspect_err(|e| {
            tracing::warn!(
                duration_ms = started.elapsed().as_millis(),
                "Upstream request to {} failed: {}",
                url,
                e
            );
        })?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(
            %status,
            duration_ms = started.elapsed().as_millis(),
            "Upstream responded for {}",
            url
        );

        Ok(UpstreamResponse { status, body })
    }
}

impl UpstreamResponse {
    /// Fails with [`AppError::Upstream`] unless the status is 2xx.
    pub fn error_for_status(self) -> Result<Self, AppError> {
        if self.status.is_success() {
            return Ok(self);
        }

        tracing::warn!(
            status = %self.status,
            body = truncate(&self.body, MAX_LOGGED_BODY),
            "Upstream returned an error status"
        );

        Err(AppError::Upstream {
            status: self.status,
        })
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUpstreamBody`] if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, AppError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

fn truncate(body: &str, max: usize) -> &str {
    match body.char_indices().nth(max) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("привіт", 3), "при");
        assert_eq!(truncate("short", 100), "short");
    }

    #[test]
    fn test_error_for_status() {
        let ok = UpstreamResponse {
            status: StatusCode::OK,
            body: "{}".to_string(),
        };
        assert!(ok.error_for_status().is_ok());

        let failed = UpstreamResponse {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: "slow down".to_string(),
        };
        let err = failed.error_for_status().unwrap_err();
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_json_rejects_plain_text() {
        let response = UpstreamResponse {
            status: StatusCode::OK,
            body: "not json".to_string(),
        };
        assert!(matches!(
            response.json(),
            Err(AppError::InvalidUpstreamBody { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_sends_query_and_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("GET"))
            .and(matchers::path("/ping"))
            .and(matchers::query_param("q", "a b"))
            .and(matchers::header("X-Test", "yes"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"pong":true}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = UpstreamClient::new().unwrap();
        let response = client
            .get(
                &format!("{}/ping", mock_server.uri()),
                &[("q", "a b")],
                &[("X-Test", "yes")],
            )
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json().unwrap()["pong"], true);
    }

    #[tokio::test]
    async fn test_get_connection_refused_is_unavailable() {
        // Reserve a free port, then release it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = UpstreamClient::new().unwrap();
        let result = client
            .get(&format!("http://127.0.0.1:{port}"), &[], &[])
            .await;

        assert!(matches!(result, Err(AppError::UpstreamUnavailable { .. })));
    }
}
