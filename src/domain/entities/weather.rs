//! Weather query entity and response envelope selection.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Validated weather request.
///
/// `requester_name` is guaranteed to hold exactly two whitespace-separated
/// words, and `date` a real calendar date written as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub requester_name: String,
    pub location: String,
    pub date: NaiveDate,
}

impl WeatherQuery {
    /// Date in the `YYYY-MM-DD` form sent upstream and echoed back.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Shape of the weather response body.
///
/// Fixed per deployment by the configured weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStyle {
    /// `{requester_name, timestamp, location, date, weather}` with a UTC
    /// `timestamp`.
    Timestamped,
    /// `{requester_name, location, date, datetime, weather}` with a local
    /// `datetime`.
    Dated,
}

/// Weather fetched on behalf of a requester.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub query: WeatherQuery,
    pub fetched_at: DateTime<Utc>,
    /// Upstream body, passed through unmodified.
    pub weather: Value,
    pub style: EnvelopeStyle,
}
