//! Validated, per-request values.
//!
//! Entities are created by [`crate::application::services::RequestValidator`]
//! once every required field has been checked, consumed by a service, and
//! dropped at the end of the request.
//!
//! # Entity Types
//!
//! - [`JokeQuery`] - Parameters for a joke lookup
//! - [`JokeEvent`] - A fetched joke with start/finish times
//! - [`WeatherQuery`] - Parameters for a historical weather lookup
//! - [`WeatherReport`] - Fetched weather ready to be rendered
//! - [`EnvelopeStyle`] - Shape of the weather response for a deployment

pub mod joke;
pub mod weather;

pub use joke::{JokeEvent, JokeQuery};
pub use weather::{EnvelopeStyle, WeatherQuery, WeatherReport};
