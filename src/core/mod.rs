//! Core application modules
//!
//! This module contains configuration, logging, and the inference backend
//! client.

pub mod backend;
pub mod config;
pub mod logging;
pub mod ollama;
