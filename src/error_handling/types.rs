//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while reading or writing configuration artifacts.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The artifact could not be read or written.
    #[error("Failed to access configuration file {path}: {source}")]
    Io {
        /// Offending path
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The artifact is not valid TOML or does not match the expected keys.
    #[error("Failed to parse configuration from {origin}: {source}")]
    Parse {
        /// File path, or `<inline>` for in-memory text
        origin: String,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// The artifact exceeds the size limit.
    #[error("Configuration file {path} is too large ({size} bytes > {limit} byte limit)")]
    FileTooLarge {
        /// Offending path
        path: String,
        /// Actual size in bytes
        size: u64,
        /// Limit in bytes
        limit: u64,
    },

    /// The path exists but is a directory or special file.
    #[error("Configuration path {path} must point to a regular file")]
    NotAFile {
        /// Offending path
        path: String,
    },

    /// No source supplied a value for a field.
    #[error("Missing configuration value '{key}': set it in secrets.toml or export {env_var}")]
    MissingField {
        /// TOML key
        key: &'static str,
        /// Environment variable
        env_var: &'static str,
    },

    /// An override variable is set but its value is not valid UTF-8.
    #[error("Environment variable {name} is set but is not valid UTF-8")]
    InvalidEnvVar {
        /// Variable name
        name: &'static str,
    },

    /// Writing the template would overwrite an existing artifact.
    #[error("Refusing to overwrite existing file {path} (pass --force to replace it)")]
    AlreadyExists {
        /// Offending path
        path: String,
    },
}

/// A configuration value failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Field name (`network_name`, `network_password` or `alert_endpoint`)
    pub field: &'static str,
    /// Human-readable reason, including how to fix it
    pub message: String,
}
