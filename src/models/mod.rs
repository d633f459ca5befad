//! API data models
//!
//! This module contains data structures for the relay API and the Ollama
//! generate API.

pub mod ollama;
pub mod relay;
