//! Helpers shared across layers.
//!
//! - [`timefmt`] - ISO-8601 timestamps and elapsed-time rendering

pub mod timefmt;
