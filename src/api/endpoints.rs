//! API endpoint handlers
//!
//! This module implements the HTTP endpoints for the relay: prompt
//! forwarding, a service info page, and a health check.

use crate::core::backend::Backend;
use crate::core::config::Config;
use crate::models::ollama::GenerateRequest;
use crate::models::relay::{ErrorResponse, RelayRequest, RelayResponse};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info, warn};

/// Fixed error message for every validation failure
const NO_INPUT_MESSAGE: &str = "No input provided";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: Arc<dyn Backend>,
}

/// Create the API router with all endpoints
///
/// The permissive CORS layer lets browser frontends on any origin call the
/// relay.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/optimize", post(optimize))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 400 response with the fixed validation message
fn no_input_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: NO_INPUT_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

/// POST /optimize - Forward a prompt to the backend
///
/// Accepting the extractor result directly keeps the rejection local: an
/// unparseable body, a missing or wrong-typed `input`, and an empty `input`
/// all produce the same fixed 400 body, and no outbound call is made.
async fn optimize(
    State(state): State<AppState>,
    payload: Result<Json<RelayRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection);
            return no_input_response();
        }
    };

    if request.input.is_empty() {
        warn!("Rejected request with empty input");
        return no_input_response();
    }

    let request_id = uuid::Uuid::new_v4();

    info!(
        "[{}] Forwarding prompt ({} bytes) to {}",
        request_id,
        request.input.len(),
        state.backend.backend_name()
    );
    debug!("[{}] Prompt: {:?}", request_id, request.input);

    let generate_request = GenerateRequest {
        model: state.config.model.clone(),
        prompt: request.input,
        stream: false,
    };

    match state.backend.generate(&generate_request).await {
        Ok(generated) => {
            debug!(
                "[{}] Backend returned {} bytes",
                request_id,
                generated.response.len()
            );
            Json(RelayResponse {
                output: generated.response.trim().to_string(),
            })
            .into_response()
        }
        Err(e) => {
            error!("[{}] Backend error: {}", request_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET / - Root endpoint
async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": format!("Ollama Relay v{}", env!("CARGO_PKG_VERSION")),
        "status": "running",
        "config": {
            "backend": state.backend.backend_name(),
            "base_url": state.config.base_url,
            "model": state.config.model,
            "request_timeout": state.config.request_timeout,
        },
        "endpoints": {
            "optimize": "/optimize",
            "health": "/health",
        },
    }))
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "backend": state.backend.backend_name(),
    }))
}
