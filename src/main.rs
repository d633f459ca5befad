//! Ollama Relay
//!
//! This application accepts prompt requests over HTTP and forwards them to a
//! locally running Ollama server, relaying the generated text back to the
//! caller.

use ollama_relay::api::endpoints::{AppState, create_router};
use ollama_relay::core::backend::Backend;
use ollama_relay::core::config::Config;
use ollama_relay::core::logging::init_logging;
use ollama_relay::core::ollama::OllamaBackend;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.log_level);

    // Print startup banner
    print_startup_banner(&config);

    // Create the backend client
    let backend: Arc<dyn Backend> = Arc::new(OllamaBackend::new(
        config.base_url.clone(),
        config.request_timeout,
    ));

    info!("Using backend: {}", backend.backend_name());

    // Create application state
    let app_state = AppState {
        config: config.clone(),
        backend,
    };

    // Create router
    let app = create_router(app_state);

    // Bind to address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Server listening on http://{}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config) {
    println!("🚀 Ollama Relay v{}", env!("CARGO_PKG_VERSION"));
    println!("✅ Configuration loaded successfully");
    println!("   Backend URL: {}", config.base_url);
    println!("   Model: {}", config.model);
    match config.request_timeout {
        Some(secs) => println!("   Request Timeout: {}s", secs),
        None => println!("   Request Timeout: none"),
    }
    println!("   Server: {}:{}", config.host, config.port);
    println!();
}

/// Print help message
fn print_help() {
    println!("Ollama Relay v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: ollama-relay [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Environment variables:");
    println!("  CONFIG_PATH - Path to the TOML config file (default: config.toml)");
    println!("  RUST_LOG    - Log filter override (default: configured log level)");
    println!();
    println!("Configuration file (all values optional):");
    println!("  [server]");
    println!("  host = \"127.0.0.1\"    # listen address");
    println!("  port = 5000           # listen port");
    println!("  log_level = \"debug\"   # trace, debug, info, warn, error");
    println!();
    println!("  [ollama]");
    println!("  base_url = \"http://localhost:11434\"");
    println!("  model = \"mistral\"");
    println!();
    println!("  [request]");
    println!("  timeout = 30          # outbound timeout in seconds; omit for none");
}
