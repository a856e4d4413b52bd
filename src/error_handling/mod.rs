//! Error handling.
//!
//! This module provides the error types for:
//! - Loading the deployment artifact and environment overrides
//! - Validating a loaded configuration
//! - Initializing the logger

mod types;

// Re-export public API
pub use types::{ConfigError, ConfigValidationError, InitializationError};
