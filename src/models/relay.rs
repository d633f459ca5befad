//! Relay API data models
//!
//! This module defines the request and response structures for the relay's
//! own HTTP surface. The inbound schema is explicit: a body that does not
//! carry a string `input` field is rejected at the extractor boundary.

use serde::{Deserialize, Serialize};

/// Inbound relay request
#[derive(Debug, Clone, Deserialize)]
pub struct RelayRequest {
    pub input: String,
}

/// Successful relay response
#[derive(Debug, Clone, Serialize)]
pub struct RelayResponse {
    pub output: String,
}

/// Error body for both validation and backend failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
