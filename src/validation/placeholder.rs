//! Placeholder detection.
//!
//! A value is unconfigured when it still matches one of the template defaults
//! (compared case-insensitively after trimming). For the endpoint, any URL on
//! the template host counts as well.

use crate::config::constants::{
    KNOWN_ENDPOINT_PLACEHOLDERS, KNOWN_NETWORK_NAME_PLACEHOLDERS, KNOWN_PASSWORD_PLACEHOLDERS,
    PLACEHOLDER_ALERT_HOST,
};
use crate::config::ConfigField;

/// Known placeholder values for `field`.
pub fn known_placeholders(field: ConfigField) -> &'static [&'static str] {
    match field {
        ConfigField::NetworkName => KNOWN_NETWORK_NAME_PLACEHOLDERS,
        ConfigField::NetworkPassword => KNOWN_PASSWORD_PLACEHOLDERS,
        ConfigField::AlertEndpoint => KNOWN_ENDPOINT_PLACEHOLDERS,
    }
}

/// Returns `true` if `value` is an unconfigured placeholder for `field`.
///
/// # Examples
///
/// ```
/// use fire_alert_config::validation::is_placeholder;
/// use fire_alert_config::ConfigField;
///
/// assert!(is_placeholder(ConfigField::NetworkName, "Your_SSID"));
/// assert!(!is_placeholder(ConfigField::NetworkName, "HomeNet"));
/// ```
pub fn is_placeholder(field: ConfigField, value: &str) -> bool {
    let trimmed = value.trim();
    if known_placeholders(field)
        .iter()
        .any(|p| p.eq_ignore_ascii_case(trimmed))
    {
        return true;
    }

    field == ConfigField::AlertEndpoint && uses_placeholder_host(trimmed)
}

fn uses_placeholder_host(value: &str) -> bool {
    let Ok(url) = url::Url::parse(value) else {
        return false;
    };
    match url.host_str() {
        Some(host) => {
            let host = host.to_ascii_lowercase();
            host == PLACEHOLDER_ALERT_HOST || host.ends_with(&format!(".{PLACEHOLDER_ALERT_HOST}"))
        }
        None => false,
    }
}
