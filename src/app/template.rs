//! Placeholder template artifact.

use std::path::Path;

use log::info;
use strum::IntoEnumIterator;

use crate::config::ConfigField;
use crate::error_handling::ConfigError;

const TEMPLATE_HEADER: &str = "\
# Deployment secrets for the fire-alert system.
#
# Copy this file to `secrets.toml` and replace every value before deploying.
# `secrets.toml` is git-ignored; never commit real credentials.
";

fn field_comment(field: ConfigField) -> &'static str {
    match field {
        ConfigField::NetworkName => "WiFi network name (SSID)",
        ConfigField::NetworkPassword => "WiFi password (WPA/WPA2 pre-shared key)",
        ConfigField::AlertEndpoint => {
            "Remote alert endpoint (webhook URL, server endpoint or cloud API)"
        }
    }
}

/// Renders the template artifact with every field at its placeholder.
///
/// The output is byte-identical to the checked-in `secrets.example.toml`.
pub fn render_template() -> String {
    let mut out = String::from(TEMPLATE_HEADER);
    for field in ConfigField::iter() {
        out.push('\n');
        out.push_str(&format!("# {}\n", field_comment(field)));
        out.push_str(&format!("{} = \"{}\"\n", field.key(), field.placeholder()));
    }
    out
}

/// Writes the template to `path`.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyExists` if `path` exists and `force` is
/// false, or `ConfigError::Io` if the write fails.
pub fn write_template(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.display().to_string(),
        });
    }

    std::fs::write(path, render_template()).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!("Wrote configuration template to {}", path.display());
    Ok(())
}
