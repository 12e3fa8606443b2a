//! # Gatemap Library
//!
//! This library exposes the Gatemap modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod api;
pub mod cli;

// Re-export gatemap_core for convenience
pub use gatemap_core;
