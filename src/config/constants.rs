//! Configuration constants: artifact names, environment variables,
//! placeholder values and validation limits.

// Artifact locations
/// Default deployment artifact (git-ignored).
pub const DEFAULT_SECRETS_PATH: &str = "secrets.toml";
/// Checked-in template artifact holding placeholder values.
pub const TEMPLATE_PATH: &str = "secrets.example.toml";
/// Maximum artifact size in bytes (64 KiB).
/// Three short strings never come close; anything larger is not a secrets file.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// TOML keys, named after the firmware's build-time constants
/// TOML key for the network name.
pub const KEY_WIFI_SSID: &str = "wifi_ssid";
/// TOML key for the network password.
pub const KEY_WIFI_PASSWORD: &str = "wifi_password";
/// TOML key for the alert endpoint URL.
pub const KEY_FIRE_ALERT_URL: &str = "fire_alert_url";

// Environment overrides
/// Environment override for the network name.
pub const ENV_WIFI_SSID: &str = "WIFI_SSID";
/// Environment override for the network password.
pub const ENV_WIFI_PASSWORD: &str = "WIFI_PASSWORD";
/// Environment override for the alert endpoint URL.
pub const ENV_FIRE_ALERT_URL: &str = "FIRE_ALERT_URL";

// Template placeholders
/// Template value for the network name.
pub const PLACEHOLDER_WIFI_SSID: &str = "Your_SSID";
/// Template value for the network password.
pub const PLACEHOLDER_WIFI_PASSWORD: &str = "Your_Password";
/// Template value for the alert endpoint.
pub const PLACEHOLDER_FIRE_ALERT_URL: &str = "http://your-server.com/fire-alert";
/// Host used by the template endpoint.
pub const PLACEHOLDER_ALERT_HOST: &str = "your-server.com";

/// Values treated as an unconfigured network name.
/// Compared case-insensitively after trimming.
pub const KNOWN_NETWORK_NAME_PLACEHOLDERS: &[&str] =
    &[PLACEHOLDER_WIFI_SSID, "YOUR_WIFI_SSID", "SSID", "changeme"];

/// Values treated as an unconfigured network password.
pub const KNOWN_PASSWORD_PLACEHOLDERS: &[&str] = &[
    PLACEHOLDER_WIFI_PASSWORD,
    "YOUR_WIFI_PASSWORD",
    "PASSWORD",
    "changeme",
];

/// Values treated as an unconfigured alert endpoint.
pub const KNOWN_ENDPOINT_PLACEHOLDERS: &[&str] = &[PLACEHOLDER_FIRE_ALERT_URL];

// WiFi credential limits (IEEE 802.11 / WPA2-Personal)
/// Maximum SSID length in bytes.
pub const MAX_SSID_BYTES: usize = 32;
/// Minimum WPA passphrase length.
pub const MIN_PASSPHRASE_LEN: usize = 8;
/// Maximum WPA passphrase length.
pub const MAX_PASSPHRASE_LEN: usize = 63;
/// Length of a raw hex-encoded pre-shared key.
pub const RAW_PSK_HEX_LEN: usize = 64;

// Endpoint limits
/// Maximum endpoint URL length, matching common server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Secret rendering
/// Stand-in for a secret in `Debug` and `Display` output.
pub const REDACTED: &str = "[REDACTED]";
/// Masked rendering of an empty secret.
pub const EMPTY_SECRET: &str = "[EMPTY]";
