//! canvass-generate
//!
//! Client for the external survey generation service: one JSON request,
//! one JSON response, no retry and no streaming.

pub mod client;
pub mod error;

pub use client::GenerateClient;
pub use error::GenerateError;
