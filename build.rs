use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

const SECRETS_FILE: &str = "secrets.toml";
const TEMPLATE_FILE: &str = "secrets.example.toml";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    wifi_ssid: String,
    wifi_password: String,
    fire_alert_url: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Rerun when either artifact or an override changes
    println!("cargo:rerun-if-changed={SECRETS_FILE}");
    println!("cargo:rerun-if-changed={TEMPLATE_FILE}");
    for var in ["WIFI_SSID", "WIFI_PASSWORD", "FIRE_ALERT_URL"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    // Real secrets win; fall back to the checked-in template
    let source = if Path::new(SECRETS_FILE).is_file() {
        SECRETS_FILE
    } else {
        TEMPLATE_FILE
    };
    let toml_str = fs::read_to_string(source)?;
    let raw: RawConfig = toml::from_str(&toml_str)?;

    let ssid = env::var("WIFI_SSID").unwrap_or(raw.wifi_ssid);
    let password = env::var("WIFI_PASSWORD").unwrap_or(raw.wifi_password);
    let url = env::var("FIRE_ALERT_URL").unwrap_or(raw.fire_alert_url);

    // Generate Rust code
    let code = format!(
        r#"
        /// Configuration baked in at build time.
        pub const BUILD_CONFIG: StaticConfig = StaticConfig {{
            network_name: {ssid:?},
            network_password: {password:?},
            alert_endpoint: {url:?},
        }};

        /// Artifact `BUILD_CONFIG` was generated from.
        pub const BUILD_CONFIG_SOURCE: &str = {source:?};
    "#
    );

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
