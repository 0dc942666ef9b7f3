//! Application layer services implementing request orchestration.
//!
//! Services consume provider traits and provide a clean API for HTTP handlers:
//! handlers pass the raw body in and get a domain value back.
//!
//! # Available Services
//!
//! - [`services::validator::RequestValidator`] - Body presence/shape and token checks
//! - [`services::joke_service::JokeService`] - Timed joke generation
//! - [`services::weather_service::WeatherService`] - Weather lookup for a requester

pub mod services;
