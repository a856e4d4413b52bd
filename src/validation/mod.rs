//! Configuration validation.
//!
//! This module provides the checks a consumer runs before using a
//! configuration:
//! - Placeholder detection (values left at the template defaults)
//! - WiFi credential shape (SSID length, WPA2 passphrase rules)
//! - Alert endpoint URL syntax
//!
//! Issues are categorized into:
//! - **Errors**: the value cannot be used (placeholder, malformed URL, ...)
//! - **Warnings**: usable but risky (open network, plain-http endpoint)

mod endpoint;
mod network;
mod placeholder;
mod types;

use log::debug;
use strum::IntoEnumIterator;

use crate::config::{AlertSystemConfig, ConfigField};

// Re-export public API
pub use endpoint::{check_endpoint, validate_endpoint};
pub use network::{check_network_name, check_password};
pub use placeholder::{is_placeholder, known_placeholders};
pub use types::{IssueKind, Severity, ValidationIssue, ValidationReport};

/// Runs every check against `config`.
///
/// A field still holding a placeholder is reported once, as a placeholder,
/// and skips its shape checks.
///
/// # Examples
///
/// ```
/// use fire_alert_config::{validate_config, AlertSystemConfig};
///
/// let report = validate_config(&AlertSystemConfig::template());
/// assert!(!report.is_valid());
/// assert_eq!(report.placeholder_fields().len(), 3);
/// ```
pub fn validate_config(config: &AlertSystemConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    for field in ConfigField::iter() {
        let value = config.value(field);

        if is_placeholder(field, value) {
            report.push(ValidationIssue::new(
                field,
                IssueKind::Placeholder,
                placeholder_message(field, config),
            ));
            continue;
        }

        match field {
            ConfigField::NetworkName => report.extend(check_network_name(value)),
            ConfigField::NetworkPassword => report.extend(check_password(value)),
            ConfigField::AlertEndpoint => report.extend(check_endpoint(value)),
        }
    }

    debug!(
        "Validation finished: {} error(s), {} warning(s)",
        report.errors().count(),
        report.warnings().count()
    );
    report
}

fn placeholder_message(field: ConfigField, config: &AlertSystemConfig) -> String {
    format!(
        "'{}' is an unconfigured placeholder; set {} in secrets.toml or export {}",
        config.display_value(field),
        field.key(),
        field.env_var()
    )
}

impl Extend<ValidationIssue> for ValidationReport {
    fn extend<T: IntoIterator<Item = ValidationIssue>>(&mut self, iter: T) {
        for issue in iter {
            self.push(issue);
        }
    }
}
