//! fire_alert_config library: deployment configuration for a fire-alert system
//!
//! This library provides the three values an embedded fire-alert consumer needs
//! to run: the WiFi network name, the WiFi password, and the remote alert
//! endpoint URL. Values are fixed once built and never change afterwards.
//!
//! Two providers are available:
//! - [`BUILD_CONFIG`]: constants baked in by `build.rs` from `secrets.toml`
//!   (or the `secrets.example.toml` template)
//! - [`load`]: a runtime loader reading `secrets.toml` with `WIFI_SSID`,
//!   `WIFI_PASSWORD` and `FIRE_ALERT_URL` environment overrides
//!
//! [`validate_config`] flags unconfigured placeholders, malformed endpoint URLs
//! and WiFi credentials no access point would accept.
//!
//! # Example
//!
//! ```no_run
//! use fire_alert_config::{load, validate_config, LoadOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = load(&LoadOptions::default())?;
//! let report = validate_config(&loaded.config);
//! if !report.is_valid() {
//!     for issue in report.errors() {
//!         eprintln!("{issue}");
//!     }
//!     std::process::exit(2);
//! }
//! let config = loaded.into_config();
//! println!("Joining {}", config.network_name());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod validation;

// Re-export public API
pub use config::{
    load, AlertSystemConfig, ConfigField, FailOn, LoadOptions, LoadedConfig, LogFormat, LogLevel,
    OutputFormat, RawConfig, Secret, StaticConfig, ValueSource, BUILD_CONFIG, BUILD_CONFIG_SOURCE,
};
pub use error_handling::{ConfigError, ConfigValidationError};
pub use validation::{validate_config, IssueKind, Severity, ValidationIssue, ValidationReport};
