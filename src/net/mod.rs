//! REST client layer: error type, wire types, and the HTTP client.

pub mod api;
pub mod error;
pub mod types;
