//! The alert-system configuration entity.

use std::fmt;

use strum_macros::EnumIter;

use crate::config::constants::{
    ENV_FIRE_ALERT_URL, ENV_WIFI_PASSWORD, ENV_WIFI_SSID, KEY_FIRE_ALERT_URL, KEY_WIFI_PASSWORD,
    KEY_WIFI_SSID, PLACEHOLDER_FIRE_ALERT_URL, PLACEHOLDER_WIFI_PASSWORD, PLACEHOLDER_WIFI_SSID,
};
use crate::config::secret::Secret;
use crate::error_handling::ConfigValidationError;
use crate::validation::validate_config;

/// The three configuration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ConfigField {
    /// WiFi network name (SSID)
    NetworkName,
    /// WiFi password
    NetworkPassword,
    /// Remote alert endpoint URL
    AlertEndpoint,
}

impl ConfigField {
    /// Field name as used in validation errors.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigField::NetworkName => "network_name",
            ConfigField::NetworkPassword => "network_password",
            ConfigField::AlertEndpoint => "alert_endpoint",
        }
    }

    /// Key in the TOML artifact.
    pub fn key(&self) -> &'static str {
        match self {
            ConfigField::NetworkName => KEY_WIFI_SSID,
            ConfigField::NetworkPassword => KEY_WIFI_PASSWORD,
            ConfigField::AlertEndpoint => KEY_FIRE_ALERT_URL,
        }
    }

    /// Environment variable that overrides the artifact.
    pub fn env_var(&self) -> &'static str {
        match self {
            ConfigField::NetworkName => ENV_WIFI_SSID,
            ConfigField::NetworkPassword => ENV_WIFI_PASSWORD,
            ConfigField::AlertEndpoint => ENV_FIRE_ALERT_URL,
        }
    }

    /// Value written to the template artifact.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ConfigField::NetworkName => PLACEHOLDER_WIFI_SSID,
            ConfigField::NetworkPassword => PLACEHOLDER_WIFI_PASSWORD,
            ConfigField::AlertEndpoint => PLACEHOLDER_FIRE_ALERT_URL,
        }
    }

    /// Whether the value must never be printed in clear.
    pub fn is_secret(&self) -> bool {
        matches!(self, ConfigField::NetworkPassword)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Deployment configuration of the fire-alert system.
///
/// Built once at start-up (from [`crate::load`] or [`crate::BUILD_CONFIG`]) and
/// passed to whatever needs it. There are no setters: the values stay fixed
/// for the lifetime of the object, so it can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use fire_alert_config::AlertSystemConfig;
///
/// let config = AlertSystemConfig::new("HomeNet", "s3cret123", "https://alerts.example.com/fire");
/// assert_eq!(config.network_name(), "HomeNet");
/// assert_eq!(config.network_password().expose(), "s3cret123");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSystemConfig {
    network_name: String,
    network_password: Secret,
    alert_endpoint: String,
}

impl AlertSystemConfig {
    /// Creates a configuration from the three values, stored verbatim.
    pub fn new(
        network_name: impl Into<String>,
        network_password: impl Into<Secret>,
        alert_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            network_name: network_name.into(),
            network_password: network_password.into(),
            alert_endpoint: alert_endpoint.into(),
        }
    }

    /// Configuration holding the template placeholders.
    pub fn template() -> Self {
        Self::new(
            PLACEHOLDER_WIFI_SSID,
            PLACEHOLDER_WIFI_PASSWORD,
            PLACEHOLDER_FIRE_ALERT_URL,
        )
    }

    /// WiFi network name (SSID).
    pub fn network_name(&self) -> &str {
        &self.network_name
    }

    /// WiFi password.
    pub fn network_password(&self) -> &Secret {
        &self.network_password
    }

    /// Remote alert endpoint URL.
    pub fn alert_endpoint(&self) -> &str {
        &self.alert_endpoint
    }

    /// Parses the alert endpoint.
    pub fn alert_endpoint_url(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.alert_endpoint)
    }

    /// Raw value of a field. The password is returned in clear.
    pub fn value(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::NetworkName => &self.network_name,
            ConfigField::NetworkPassword => self.network_password.expose(),
            ConfigField::AlertEndpoint => &self.alert_endpoint,
        }
    }

    /// Value of a field safe for display; the password is masked.
    pub fn display_value(&self, field: ConfigField) -> String {
        if field.is_secret() {
            self.network_password.masked()
        } else {
            self.value(field).to_string()
        }
    }

    /// Validates the configuration, returning the first error found.
    ///
    /// Warnings (open network, plain-http endpoint) do not fail validation. Use
    /// [`validate_config`] for the complete report.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigValidationError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match validate_config(self).errors().next() {
            Some(issue) => Err(ConfigValidationError {
                field: issue.field.name(),
                message: issue.message.clone(),
            }),
            None => Ok(()),
        }
    }
}
