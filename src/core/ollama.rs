//! Ollama backend implementation

use crate::core::backend::{Backend, BackendError};
use crate::models::ollama::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Path of the generate endpoint relative to the backend base URL
const GENERATE_PATH: &str = "/api/generate";

/// Ollama backend speaking the `/api/generate` protocol
pub struct OllamaBackend {
    client: Client,
    base_url: String,
}

impl OllamaBackend {
    /// Create a new Ollama backend
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the Ollama server, e.g. `http://localhost:11434`
    /// * `timeout` - Optional request timeout in seconds; when `None`, the
    ///   client waits on the backend indefinitely
    pub fn new(base_url: String, timeout: Option<u64>) -> Self {
        let mut builder = Client::builder();
        if let Some(secs) = timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self { client, base_url }
    }
}

#[async_trait]
impl Backend for OllamaBackend {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, BackendError> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::Timeout(e.to_string())
                } else {
                    BackendError::Connect(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(BackendError::Status {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        Ok(generated)
    }

    fn backend_name(&self) -> &str {
        "Ollama"
    }
}
