//! HTTP API
//!
//! This module contains the router and endpoint handlers.

pub mod endpoints;
