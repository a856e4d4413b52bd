//! Tests for the checked-in template and the compiled-in configuration.

use std::path::Path;

use fire_alert_config::app::render_template;
use fire_alert_config::{validate_config, RawConfig, StaticConfig, BUILD_CONFIG, BUILD_CONFIG_SOURCE};

fn manifest_file(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

#[test]
fn test_checked_in_template_matches_rendered_template() {
    assert_eq!(manifest_file("secrets.example.toml"), render_template());
}

#[test]
fn test_checked_in_template_contains_only_placeholders() {
    let config = RawConfig::from_toml_str(&manifest_file("secrets.example.toml"))
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(validate_config(&config).placeholder_fields().len(), 3);
}

#[test]
fn test_secrets_are_git_ignored() {
    let gitignore = manifest_file(".gitignore");
    let ignored: Vec<&str> = gitignore.lines().map(str::trim).collect();
    assert!(ignored.contains(&"secrets.toml"));
    assert!(ignored.contains(&".env"));
}

#[test]
fn test_compiled_config_matches_its_source_artifact() {
    // Build-time env overrides would legitimately change the values
    if ["WIFI_SSID", "WIFI_PASSWORD", "FIRE_ALERT_URL"]
        .iter()
        .any(|v| std::env::var(v).is_ok())
    {
        return;
    }

    let expected = RawConfig::from_toml_str(&manifest_file(BUILD_CONFIG_SOURCE))
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(BUILD_CONFIG.to_config(), expected);
    assert_eq!(
        StaticConfig::is_from_template(),
        BUILD_CONFIG_SOURCE == "secrets.example.toml"
    );
}
