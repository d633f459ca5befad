//! Backend abstraction for the downstream inference service
//!
//! This module defines the trait the relay talks to the text-generation
//! service through. Handlers hold a trait object so tests can substitute a
//! fake backend or point the real one at a mock server.

use crate::models::ollama::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Error types for backend operations
///
/// The HTTP surface collapses every variant into one 500 response; the
/// variants exist so callers and logs can tell failure kinds apart.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Backend error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}

/// Trait for text-generation backends
#[async_trait]
pub trait Backend: Send + Sync {
    /// Send a single generate request and wait for the full response
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, BackendError>;

    /// Get the backend name
    fn backend_name(&self) -> &str;
}
