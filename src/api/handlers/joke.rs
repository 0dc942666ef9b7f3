//! Handler for the joke generation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use crate::api::dto::joke::JokeResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Generates a joke for an authorized caller.
///
/// # Endpoint
///
/// `POST /content/api/v1/integration/generate`
///
/// # Request Body
///
/// ```json
/// { "token": "<api token>", "exclude": "nsfw" }
/// ```
///
/// `exclude` is optional.
///
/// # Errors
///
/// - 400 if the body is not a JSON object or `token` is missing
/// - 403 if `token` does not match
/// - upstream status (or 502) if the joke API fails
pub async fn joke_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<JokeResponse>, AppError> {
    let Json(body) = payload?;

    let event = state.joke_service.generate(&body).await?;

    Ok(Json(event.into()))
}
