//! Shared utilities, configuration, and error handling for the Ammaar site
//!
//! This crate provides common functionality used across the workspace:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - State machine error type shared by the domain crates
//! - Tracing subscriber setup for binaries

pub mod config;
pub mod error;
pub mod logging;
pub mod state;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use state::StateError;
