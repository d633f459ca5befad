//! Application configuration management
//!
//! This module handles loading and validating configuration from TOML files.
//! All configuration is validated at startup; a missing file falls back to
//! defaults that match the reference deployment (a local relay in front of
//! an Ollama server on the same host).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default server host
const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
const DEFAULT_PORT: u16 = 5000;

/// Default logging level
const DEFAULT_LOG_LEVEL: &str = "debug";

/// Default Ollama base URL
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model passed to the backend
const DEFAULT_MODEL: &str = "mistral";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RequestSection {
    /// Outbound request timeout in seconds; absent means no timeout
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Default for OllamaSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: Option<ServerSection>,
    #[serde(default)]
    pub ollama: Option<OllamaSection>,
    #[serde(default)]
    pub request: RequestSection,
}

/// Application configuration
///
/// Loaded once at startup so the process fails fast when misconfigured.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Logging level
    pub log_level: String,

    /// Base URL of the Ollama server
    pub base_url: String,

    /// Model name sent with every generate request
    pub model: String,

    /// Outbound request timeout in seconds; `None` disables the timeout
    pub request_timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default())
    }
}

impl Config {
    fn from_toml(config: TomlConfig) -> Self {
        let server = config.server.unwrap_or_default();
        let ollama = config.ollama.unwrap_or_default();

        Config {
            host: server.host,
            port: server.port,
            log_level: server.log_level,
            base_url: ollama.base_url,
            model: ollama.model,
            request_timeout: config.request.timeout,
        }
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        Ok(Self::from_toml(config))
    }

    /// Load configuration from the environment
    ///
    /// Looks for the file named by `CONFIG_PATH`, falling back to
    /// `config.toml` in the current directory. A missing file is not an
    /// error; defaults apply.
    pub fn from_env() -> Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }
}
