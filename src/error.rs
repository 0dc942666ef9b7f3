//! Application error type and its HTTP rendering.
//!
//! Every recognized failure (validation, token mismatch, upstream lookup) is
//! raised as an [`AppError`] at the point of detection and propagated with `?`
//! up to the Axum boundary, where [`IntoResponse`] renders the error envelope:
//!
//! ```json
//! { "message": "token is required", "field": "token" }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Body is not JSON or not a JSON object.
    #[error("{message}")]
    MalformedBody { message: String },

    /// A required field is absent or `null`.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Token is present but does not match the configured secret.
    #[error("wrong API token")]
    InvalidToken,

    /// Field is present but has the wrong shape.
    #[error("{message}")]
    InvalidFormat {
        field: &'static str,
        message: String,
    },

    /// Location could not be resolved to a place identifier.
    #[error("{message}")]
    LocationLookup { status: StatusCode, message: String },

    /// Upstream answered with a non-success status.
    #[error("upstream request failed")]
    Upstream { status: StatusCode },

    /// Upstream could not be reached at the transport level.
    #[error("upstream service unavailable")]
    UpstreamUnavailable { source: reqwest::Error },

    /// Upstream answered with a body that is not valid JSON.
    #[error("invalid upstream response")]
    InvalidUpstreamBody { source: serde_json::Error },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    pub fn invalid_format(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            message: message.into(),
        }
    }

    pub fn bad_location(status: StatusCode) -> Self {
        Self::LocationLookup {
            status,
            message: "Bad location".to_string(),
        }
    }

    pub fn location_not_found() -> Self {
        Self::LocationLookup {
            status: StatusCode::NOT_FOUND,
            message: "Could not find location".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status the error is rendered with.
    ///
    /// Upstream statuses are mirrored only when they are client or server
    /// errors; anything else (redirects, informational) becomes `502`.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody { .. } | Self::MissingField { .. } | Self::InvalidFormat { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::LocationLookup { status, .. } | Self::Upstream { status } => {
                mirror_status(*status)
            }
            Self::UpstreamUnavailable { .. } | Self::InvalidUpstreamBody { .. } => {
                StatusCode::BAD_GATEWAY
            }
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Extra envelope fields beside `message`.
    fn payload(&self) -> Map<String, Value> {
        let extra = match self {
            Self::MissingField { field } | Self::InvalidFormat { field, .. } => {
                json!({ "field": field })
            }
            Self::Upstream { status } => json!({ "upstream_status": status.as_u16() }),
            _ => json!({}),
        };

        match extra {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

fn mirror_status(status: StatusCode) -> StatusCode {
    if status.is_client_error() || status.is_server_error() {
        status
    } else {
        StatusCode::BAD_GATEWAY
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::UpstreamUnavailable { source } => {
                tracing::error!(error = %source, "Upstream transport failure");
            }
            Self::InvalidUpstreamBody { source } => {
                tracing::error!(error = %source, "Upstream returned malformed JSON");
            }
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
            _ if status.is_server_error() => tracing::warn!(%status, "{}", self),
            _ => tracing::debug!(%status, "{}", self),
        }

        let mut body = self.payload();
        body.insert("message".to_string(), Value::String(self.to_string()));

        (status, Json(Value::Object(body))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::malformed_body(rejection.body_text())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(source: reqwest::Error) -> Self {
        Self::UpstreamUnavailable { source }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(source: serde_json::Error) -> Self {
        Self::InvalidUpstreamBody { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_statuses() {
        assert_eq!(
            AppError::MissingField { field: "token" }.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidToken.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::invalid_format("date", "Wrong date format").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_location_lookup_mirrors_upstream_status() {
        let err = AppError::bad_location(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Bad location");

        let err = AppError::location_not_found();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Could not find location");
    }

    #[test]
    fn test_non_error_upstream_status_becomes_bad_gateway() {
        let err = AppError::Upstream {
            status: StatusCode::MOVED_PERMANENTLY,
        };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);

        let err = AppError::Upstream {
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_payload_names_field() {
        let payload = AppError::MissingField {
            field: "requester_name",
        }
        .payload();
        assert_eq!(payload["field"], "requester_name");

        assert!(AppError::InvalidToken.payload().is_empty());
    }
}
