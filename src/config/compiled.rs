//! Configuration baked in at build time.
//!
//! `build.rs` reads `secrets.toml` (or the `secrets.example.toml` template when
//! no deployment artifact exists), applies `WIFI_SSID` / `WIFI_PASSWORD` /
//! `FIRE_ALERT_URL` from the build environment, and generates
//! [`BUILD_CONFIG`] and [`BUILD_CONFIG_SOURCE`].

use std::fmt;

use crate::config::alert::AlertSystemConfig;
use crate::config::constants::REDACTED;

/// Compile-time configuration with `'static` values.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct StaticConfig {
    /// WiFi network name (SSID)
    pub network_name: &'static str,

    /// WiFi password
    pub network_password: &'static str,

    /// Remote alert endpoint URL
    pub alert_endpoint: &'static str,
}

impl fmt::Debug for StaticConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticConfig")
            .field("network_name", &self.network_name)
            .field("network_password", &REDACTED)
            .field("alert_endpoint", &self.alert_endpoint)
            .finish()
    }
}

impl StaticConfig {
    /// Converts into the runtime entity, values unchanged.
    pub fn to_config(&self) -> AlertSystemConfig {
        AlertSystemConfig::new(
            self.network_name,
            self.network_password,
            self.alert_endpoint,
        )
    }

    /// Whether the constants came from the placeholder template.
    pub fn is_from_template() -> bool {
        BUILD_CONFIG_SOURCE == crate::config::constants::TEMPLATE_PATH
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
