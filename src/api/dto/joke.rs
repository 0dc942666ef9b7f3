//! DTOs for the joke endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::domain::JokeEvent;
use crate::utils::timefmt::{format_elapsed, iso_local};

/// Joke envelope.
///
/// ```json
/// {
///   "event_start_datetime": "2024-03-01T12:00:00.100000",
///   "event_finished_datetime": "2024-03-01T12:00:00.451204",
///   "event_duration": "0:00:00.351204",
///   "joke": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct JokeResponse {
    pub event_start_datetime: String,
    pub event_finished_datetime: String,
    pub event_duration: String,
    pub joke: Value,
}

impl From<JokeEvent> for JokeResponse {
    fn from(event: JokeEvent) -> Self {
        Self {
            event_start_datetime: iso_local(&event.started_at),
            event_finished_datetime: iso_local(&event.finished_at),
            event_duration: format_elapsed(event.duration()),
            joke: event.joke,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeDelta};
    use serde_json::json;

    #[test]
    fn test_from_event() {
        let started_at = Local::now();
        let event = JokeEvent {
            started_at,
            finished_at: started_at + TimeDelta::milliseconds(1_500),
            joke: json!({"joke": "ha"}),
        };

        let response = JokeResponse::from(event);

        assert_eq!(response.event_duration, "0:00:01.500000");
        assert_eq!(response.joke["joke"], "ha");

        let json = serde_json::to_value(&response).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
    }
}
