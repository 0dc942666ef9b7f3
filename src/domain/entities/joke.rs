//! Joke query and result entities.

use chrono::{DateTime, Local, TimeDelta};
use serde_json::Value;

/// Validated joke request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JokeQuery {
    /// Category the upstream should leave out (e.g. `nsfw`).
    ///
    /// `None` when the caller sent no filter, `null`, or an empty string.
    pub exclude: Option<String>,
}

impl JokeQuery {
    pub fn new(exclude: Option<String>) -> Self {
        Self {
            exclude: exclude.filter(|e| !e.is_empty()),
        }
    }
}

/// Timed result of one joke generation.
#[derive(Debug, Clone)]
pub struct JokeEvent {
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    /// Upstream body, passed through unmodified.
    pub joke: Value,
}

impl JokeEvent {
    pub fn duration(&self) -> TimeDelta {
        self.finished_at - self.started_at
    }
}
