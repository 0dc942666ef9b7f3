//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod home;
pub mod joke;
pub mod weather;

pub use home::home_handler;
pub use joke::joke_handler;
pub use weather::weather_handler;
