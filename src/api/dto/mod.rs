//! Data Transfer Objects for API responses.
//!
//! Request bodies are taken as raw JSON and checked by
//! [`crate::application::services::RequestValidator`], so only response
//! envelopes live here.

pub mod joke;
pub mod weather;
