//! HTTP relay in front of a local Ollama server
//!
//! This library accepts a JSON request containing a text prompt, forwards it
//! to a locally running Ollama instance over HTTP, and relays the generated
//! text back to the caller as JSON.

pub mod api;
pub mod core;
pub mod models;
