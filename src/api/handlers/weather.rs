//! Handler for the weather endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use crate::api::dto::weather::WeatherResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Fetches historical weather for a location on behalf of a requester.
///
/// # Endpoint
///
/// `POST /weather` (Meteosource) or
/// `POST /content/api/v1/integration/weather` (Visual Crossing)
///
/// # Request Body
///
/// ```json
/// {
///   "token": "<api token>",
///   "requester_name": "Jane Doe",
///   "location": "Kyiv",
///   "date": "2024-03-01"
/// }
/// ```
///
/// # Errors
///
/// - 400 for a missing field, a name that is not two words, or a bad date
/// - 403 if `token` does not match
/// - 404 `Could not find location` if the location resolves to nothing
/// - upstream status with `Bad location` if the place lookup fails
pub async fn weather_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<WeatherResponse>, AppError> {
    let Json(body) = payload?;

    let report = state.weather_service.report(&body).await?;

    Ok(Json(report.into()))
}
