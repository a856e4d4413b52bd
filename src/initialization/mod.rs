//! Application initialization.
//!
//! This module provides logger setup for the CLI. Loading the configuration
//! itself lives in [`crate::config`].

mod logger;

// Re-export public API
pub use logger::init_logger_with;
