//! Application configuration and constants.
//!
//! This module provides:
//! - The `AlertSystemConfig` entity and its `Secret` password wrapper
//! - Configuration constants (artifact names, env vars, placeholders, limits)
//! - The runtime loader (TOML artifact + environment overrides)
//! - The compile-time provider generated by `build.rs`
//! - CLI option types

mod alert;
mod compiled;
pub mod constants;
mod loader;
mod secret;
mod types;

// Re-export public API
pub use alert::{AlertSystemConfig, ConfigField};
pub use compiled::{StaticConfig, BUILD_CONFIG, BUILD_CONFIG_SOURCE};
pub use loader::{load, load_with_env, LoadOptions, LoadedConfig, RawConfig, ValueSource};
pub use secret::Secret;
pub use types::{FailOn, LogFormat, LogLevel, OutputFormat};
