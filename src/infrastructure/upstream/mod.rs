//! HTTP clients for the third-party APIs.
//!
//! All clients share one [`UpstreamClient`] (a pooled `reqwest::Client`) and
//! perform plain GET requests. There are no retries and no caching: every
//! provider call maps to a fixed number of outbound requests.
//!
//! - [`RsaJokeClient`] - joke API, one request
//! - [`MeteosourceClient`] - place lookup then historical weather, two requests
//! - [`VisualCrossingClient`] - timeline weather, one request

mod http;
mod meteosource;
mod rsa_jokes;
mod visual_crossing;

pub use http::{UpstreamClient, UpstreamResponse};
pub use meteosource::MeteosourceClient;
pub use rsa_jokes::RsaJokeClient;
pub use visual_crossing::VisualCrossingClient;
