//! DTOs for the weather endpoint.

use chrono::Local;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{EnvelopeStyle, WeatherReport};
use crate::utils::timefmt::{iso_local, iso_utc};

/// Weather envelope; the variant is fixed per deployment.
///
/// Uses an untagged enum so no discriminator field appears in the JSON.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WeatherResponse {
    /// `{requester_name, timestamp, location, date, weather}`
    Timestamped {
        requester_name: String,
        /// UTC, e.g. `2024-03-01T10:30:05.123456+00:00`.
        timestamp: String,
        location: String,
        date: String,
        weather: Value,
    },
    /// `{requester_name, location, date, datetime, weather}`
    Dated {
        requester_name: String,
        location: String,
        date: String,
        /// Local time without offset.
        datetime: String,
        weather: Value,
    },
}

impl From<WeatherReport> for WeatherResponse {
    fn from(report: WeatherReport) -> Self {
        let date = report.query.date_string();

        match report.style {
            EnvelopeStyle::Timestamped => Self::Timestamped {
                requester_name: report.query.requester_name,
                timestamp: iso_utc(&report.fetched_at),
                location: report.query.location,
                date,
                weather: report.weather,
            },
            EnvelopeStyle::Dated => Self::Dated {
                requester_name: report.query.requester_name,
                location: report.query.location,
                date,
                datetime: iso_local(&report.fetched_at.with_timezone(&Local)),
                weather: report.weather,
            },
        }
    }
}
