//! Upstream provider trait definitions.
//!
//! These traits are the seam between the application layer and the
//! third-party HTTP APIs. Implementations live in
//! `crate::infrastructure::upstream`; mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Providers
//!
//! - [`JokeProvider`] - Random joke generation
//! - [`WeatherProvider`] - Historical weather for a free-text location

pub mod joke_provider;
pub mod weather_provider;

pub use joke_provider::JokeProvider;
pub use weather_provider::WeatherProvider;

#[cfg(test)]
pub use joke_provider::MockJokeProvider;
#[cfg(test)]
pub use weather_provider::MockWeatherProvider;
