// Shared test helpers for writing configuration artifacts.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::path::PathBuf;

use tempfile::TempDir;

/// Deployment values used throughout the tests.
#[allow(dead_code)] // Used by other test files
pub const DEPLOYED_SSID: &str = "HomeNet";
#[allow(dead_code)]
pub const DEPLOYED_PASSWORD: &str = "s3cret123";
#[allow(dead_code)]
pub const DEPLOYED_URL: &str = "https://alerts.example.com/fire";

/// Writes `contents` to `secrets.toml` inside a fresh temp dir.
/// The directory is removed when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn write_artifact(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("secrets.toml");
    std::fs::write(&path, contents).expect("Failed to write artifact");
    (dir, path)
}

/// Renders a complete artifact from three values.
#[allow(dead_code)]
pub fn artifact(ssid: &str, password: &str, url: &str) -> String {
    format!("wifi_ssid = \"{ssid}\"\nwifi_password = \"{password}\"\nfire_alert_url = \"{url}\"\n")
}

/// Builds an environment lookup from pairs, without touching the process environment.
#[allow(dead_code)]
pub fn env_lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}
