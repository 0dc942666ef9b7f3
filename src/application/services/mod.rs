//! Business logic services for the application layer.

pub mod joke_service;
pub mod validator;
pub mod weather_service;

pub use joke_service::JokeService;
pub use validator::RequestValidator;
pub use weather_service::WeatherService;
