//! Request body validation.
//!
//! The validator is a pure function of the inbound JSON body and the
//! configured API token. Fields are checked in a fixed declaration order so
//! the reported failure is deterministic:
//!
//! | Endpoint | Order |
//! |----------|-------|
//! | joke     | `token`, `exclude` (optional) |
//! | weather  | `token`, `requester_name`, `location`, `date` |
//!
//! The token is compared right after its presence is confirmed, so a wrong
//! token yields `403` no matter what the remaining fields look like.

use chrono::NaiveDate;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::domain::{JokeQuery, WeatherQuery};
use crate::error::AppError;

pub const FIELD_TOKEN: &str = "token";
pub const FIELD_EXCLUDE: &str = "exclude";
pub const FIELD_REQUESTER_NAME: &str = "requester_name";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_DATE: &str = "date";

/// Strict `YYYY-MM-DD` shape; calendar validity is checked separately.
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Validates inbound bodies against the configured API token.
#[derive(Clone)]
pub struct RequestValidator {
    api_token: String,
}

impl RequestValidator {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }

    /// Returns the value of `field` if it is present and not `null`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingField`] naming `field`.
    pub fn require<'a>(
        &self,
        body: &'a Map<String, Value>,
        field: &'static str,
    ) -> Result<&'a Value, AppError> {
        match body.get(field) {
            None | Some(Value::Null) => Err(AppError::MissingField { field }),
            Some(value) => Ok(value),
        }
    }

    /// Checks that `token` is present and equals the configured secret.
    ///
    /// A token that is not a JSON string never matches.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingField`] if `token` is absent or `null`
    /// - [`AppError::InvalidToken`] on mismatch
    pub fn check_token(&self, body: &Map<String, Value>) -> Result<(), AppError> {
        match self.require(body, FIELD_TOKEN)? {
            Value::String(token) if *token == self.api_token => Ok(()),
            _ => Err(AppError::InvalidToken),
        }
    }

    /// Validates a joke request body.
    ///
    /// `exclude` is optional; `null` or an empty string mean "no filter".
    ///
    /// # Errors
    ///
    /// - [`AppError::MalformedBody`] if the body is not a JSON object
    /// - token errors, see [`Self::check_token`]
    /// - [`AppError::InvalidFormat`] if `exclude` is not a string
    pub fn validate_joke(&self, body: &Value) -> Result<JokeQuery, AppError> {
        let body = as_object(body)?;
        self.check_token(body)?;

        let exclude = match body.get(FIELD_EXCLUDE) {
            None | Some(Value::Null) => None,
            Some(Value::String(exclude)) => Some(exclude.clone()),
            Some(_) => {
                return Err(AppError::invalid_format(
                    FIELD_EXCLUDE,
                    "exclude must be a string",
                ));
            }
        };

        Ok(JokeQuery::new(exclude))
    }

    /// Validates a weather request body.
    ///
    /// # Errors
    ///
    /// - [`AppError::MalformedBody`] if the body is not a JSON object
    /// - [`AppError::MissingField`] for the first absent field, in declaration order
    /// - [`AppError::InvalidToken`] on token mismatch
    /// - [`AppError::InvalidFormat`] if the name is not exactly two words,
    ///   the location is blank, or the date is not a real `YYYY-MM-DD` date
    pub fn validate_weather(&self, body: &Value) -> Result<WeatherQuery, AppError> {
        let body = as_object(body)?;
        self.check_token(body)?;

        let requester_name = parse_requester_name(self.require(body, FIELD_REQUESTER_NAME)?)?;
        let location = parse_location(self.require(body, FIELD_LOCATION)?)?;
        let date = parse_date(self.require(body, FIELD_DATE)?)?;

        Ok(WeatherQuery {
            requester_name,
            location,
            date,
        })
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, AppError> {
    body.as_object()
        .ok_or_else(|| AppError::malformed_body("request body must be a JSON object"))
}

/// Accepts exactly two whitespace-separated words, returned as sent.
fn parse_requester_name(value: &Value) -> Result<String, AppError> {
    match value {
        Value::String(name) if name.split_whitespace().count() == 2 => Ok(name.clone()),
        _ => Err(AppError::invalid_format(
            FIELD_REQUESTER_NAME,
            "Enter full name",
        )),
    }
}

fn parse_location(value: &Value) -> Result<String, AppError> {
    match value {
        Value::String(location) if !location.trim().is_empty() => Ok(location.clone()),
        _ => Err(AppError::invalid_format(
            FIELD_LOCATION,
            "location must be a non-empty string",
        )),
    }
}

fn parse_date(value: &Value) -> Result<NaiveDate, AppError> {
    let wrong_format = || AppError::invalid_format(FIELD_DATE, "Wrong date format");

    let raw = value.as_str().ok_or_else(wrong_format)?;
    if !DATE_REGEX.is_match(raw) {
        return Err(wrong_format());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| wrong_format())
}
