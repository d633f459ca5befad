//! Ollama generate API data models
//!
//! This module defines the wire structures for Ollama's `/api/generate`
//! endpoint. Only the `response` field of the reply is consumed; everything
//! else the server sends (timings, context, done flags) is ignored.

use serde::{Deserialize, Serialize};

/// Generate request sent to Ollama
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// Generate response returned by Ollama
///
/// `response` defaults to the empty string when the field is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}
