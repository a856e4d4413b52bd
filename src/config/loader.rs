//! Runtime configuration loading.
//!
//! Builds one [`AlertSystemConfig`] at start-up from the deployment artifact
//! (`secrets.toml`) with environment variable overrides layered on top.

use std::env::VarError;
use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use strum::IntoEnumIterator;

use crate::config::alert::{AlertSystemConfig, ConfigField};
use crate::config::constants::{DEFAULT_SECRETS_PATH, MAX_CONFIG_FILE_SIZE, REDACTED};
use crate::error_handling::ConfigError;

/// Partially specified configuration, as read from one source.
///
/// Every field is optional so sources can be layered with [`RawConfig::overlay`].
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// WiFi network name
    pub wifi_ssid: Option<String>,
    /// WiFi password
    pub wifi_password: Option<String>,
    /// Alert endpoint URL
    pub fire_alert_url: Option<String>,
}

impl fmt::Debug for RawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawConfig")
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_password", &self.wifi_password.as_ref().map(|_| REDACTED))
            .field("fire_alert_url", &self.fire_alert_url)
            .finish()
    }
}

impl RawConfig {
    /// Parses a TOML artifact.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML, wrong value types or
    /// unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, "<inline>")
    }

    /// Reads and parses a TOML artifact from disk.
    ///
    /// The path must be a regular file no larger than `MAX_CONFIG_FILE_SIZE`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = read_config_file(path)?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    /// Reads overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable holds non-UTF-8 data.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::try_from_env_with(|name| std::env::var(name))
    }

    /// Like [`RawConfig::from_env_with`], but keeps unset and undecodable
    /// variables apart instead of treating both as absent.
    pub fn try_from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut raw = Self::default();
        for field in ConfigField::iter() {
            match lookup(field.env_var()) {
                Ok(value) => raw.set(field, value),
                Err(VarError::NotPresent) => {}
                Err(VarError::NotUnicode(_)) => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: field.env_var(),
                    })
                }
            }
        }
        Ok(raw)
    }

    /// Reads overrides through `lookup`, which maps a variable name to its value.
    ///
    /// Lets callers (and tests) supply an environment without touching the
    /// process-wide one. A variable set to the empty string counts as set.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut raw = Self::default();
        for field in ConfigField::iter() {
            if let Some(value) = lookup(field.env_var()) {
                raw.set(field, value);
            }
        }
        raw
    }

    /// Layers `other` on top of `self`: fields present in `other` win.
    pub fn overlay(self, other: RawConfig) -> RawConfig {
        RawConfig {
            wifi_ssid: other.wifi_ssid.or(self.wifi_ssid),
            wifi_password: other.wifi_password.or(self.wifi_password),
            fire_alert_url: other.fire_alert_url.or(self.fire_alert_url),
        }
    }

    /// Value of `field`, if present.
    pub fn get(&self, field: ConfigField) -> Option<&str> {
        match field {
            ConfigField::NetworkName => self.wifi_ssid.as_deref(),
            ConfigField::NetworkPassword => self.wifi_password.as_deref(),
            ConfigField::AlertEndpoint => self.fire_alert_url.as_deref(),
        }
    }

    fn set(&mut self, field: ConfigField, value: String) {
        match field {
            ConfigField::NetworkName => self.wifi_ssid = Some(value),
            ConfigField::NetworkPassword => self.wifi_password = Some(value),
            ConfigField::AlertEndpoint => self.fire_alert_url = Some(value),
        }
    }

    /// Turns a complete raw configuration into the immutable entity.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` for the first absent field.
    pub fn resolve(self) -> Result<AlertSystemConfig, ConfigError> {
        let missing = |field: ConfigField| ConfigError::MissingField {
            key: field.key(),
            env_var: field.env_var(),
        };
        let ssid = self
            .wifi_ssid
            .ok_or_else(|| missing(ConfigField::NetworkName))?;
        let password = self
            .wifi_password
            .ok_or_else(|| missing(ConfigField::NetworkPassword))?;
        let url = self
            .fire_alert_url
            .ok_or_else(|| missing(ConfigField::AlertEndpoint))?;
        Ok(AlertSystemConfig::new(ssid, password, url))
    }
}

/// Where a loaded value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// The TOML artifact
    File,
    /// An environment variable (possibly from `.env`)
    Environment,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::File => f.write_str("file"),
            ValueSource::Environment => f.write_str("environment"),
        }
    }
}

/// Options for [`load`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Artifact to read. `None` reads `secrets.toml` only if it exists.
    pub path: Option<PathBuf>,

    /// Apply `WIFI_SSID` / `WIFI_PASSWORD` / `FIRE_ALERT_URL` overrides
    pub use_env: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            path: None,
            use_env: true,
        }
    }
}

/// A loaded configuration plus where each value came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The configuration
    pub config: AlertSystemConfig,

    /// Artifact that was read, if any
    pub path: Option<PathBuf>,

    sources: Vec<(ConfigField, ValueSource)>,
}

impl LoadedConfig {
    /// Source of `field`'s value.
    pub fn source(&self, field: ConfigField) -> ValueSource {
        self.sources
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, source)| *source)
            .unwrap_or(ValueSource::File)
    }

    /// Consumes the wrapper, keeping only the configuration.
    pub fn into_config(self) -> AlertSystemConfig {
        self.config
    }
}

/// Loads the configuration using the process environment.
///
/// # Errors
///
/// Returns an error if an explicitly requested file is missing or unreadable,
/// the artifact is malformed, an override variable is not valid UTF-8, or a
/// field is supplied by no source.
pub fn load(options: &LoadOptions) -> Result<LoadedConfig, ConfigError> {
    let env_raw = if options.use_env {
        RawConfig::from_env()?
    } else {
        RawConfig::default()
    };
    load_with_env(options, |name| {
        ConfigField::iter()
            .find(|field| field.env_var() == name)
            .and_then(|field| env_raw.get(field))
            .map(str::to_string)
    })
}

/// Loads the configuration with an explicit environment lookup.
pub fn load_with_env<F>(options: &LoadOptions, lookup: F) -> Result<LoadedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (file_raw, path) = match &options.path {
        Some(path) => {
            debug!("Reading configuration from {}", path.display());
            (RawConfig::from_file(path)?, Some(path.clone()))
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_SECRETS_PATH);
            if default_path.is_file() {
                debug!("Reading configuration from {}", default_path.display());
                (RawConfig::from_file(&default_path)?, Some(default_path))
            } else {
                debug!(
                    "No {} found, relying on environment variables",
                    DEFAULT_SECRETS_PATH
                );
                (RawConfig::default(), None)
            }
        }
    };

    let env_raw = if options.use_env {
        RawConfig::from_env_with(lookup)
    } else {
        RawConfig::default()
    };

    let sources: Vec<(ConfigField, ValueSource)> = ConfigField::iter()
        .filter_map(|field| {
            if env_raw.get(field).is_some() {
                Some((field, ValueSource::Environment))
            } else {
                file_raw.get(field).map(|_| (field, ValueSource::File))
            }
        })
        .collect();

    let config = file_raw.overlay(env_raw).resolve()?;

    let from_env = sources
        .iter()
        .filter(|(_, s)| *s == ValueSource::Environment)
        .count();
    info!(
        "Configuration loaded ({} from file, {} from environment)",
        sources.len() - from_env,
        from_env
    );
    debug!(
        "network_name={} network_password={} alert_endpoint={}",
        config.network_name(),
        config.network_password().masked(),
        config.alert_endpoint()
    );

    Ok(LoadedConfig {
        config,
        path,
        sources,
    })
}

/// Reads a configuration file with a size limit.
fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    let metadata = std::fs::metadata(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    if !metadata.is_file() {
        return Err(ConfigError::NotAFile {
            path: path.display().to_string(),
        });
    }

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::FileTooLarge {
            path: path.display().to_string(),
            size: metadata.len(),
            limit: MAX_CONFIG_FILE_SIZE,
        });
    }

    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}
