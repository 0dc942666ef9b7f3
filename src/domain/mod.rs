//! Domain layer containing validated request types and upstream contracts.
//!
//! Nothing here performs I/O. Provider traits define what the application
//! layer needs from third-party APIs; concrete HTTP clients live in
//! [`crate::infrastructure::upstream`].
//!
//! # Architecture
//!
//! - [`entities`] - Typed projections of validated request bodies
//! - [`providers`] - Joke and weather upstream trait definitions

pub mod entities;
pub mod providers;

pub use entities::{EnvelopeStyle, JokeEvent, JokeQuery, WeatherQuery, WeatherReport};
