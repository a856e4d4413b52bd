//! WiFi credential checks (IEEE 802.11 SSID and WPA2-Personal passphrase rules).

use crate::config::constants::{
    MAX_PASSPHRASE_LEN, MAX_SSID_BYTES, MIN_PASSPHRASE_LEN, RAW_PSK_HEX_LEN,
};
use crate::config::ConfigField;
use crate::validation::types::{IssueKind, ValidationIssue};

/// Checks a network name. Returns at most one issue.
pub fn check_network_name(value: &str) -> Option<ValidationIssue> {
    if value.trim().is_empty() {
        return Some(ValidationIssue::new(
            ConfigField::NetworkName,
            IssueKind::Empty,
            "network name is empty; set wifi_ssid to the name your access point advertises",
        ));
    }

    if value.len() > MAX_SSID_BYTES {
        return Some(ValidationIssue::new(
            ConfigField::NetworkName,
            IssueKind::InvalidNetworkName,
            format!(
                "network name is {} bytes long; SSIDs are limited to {} bytes",
                value.len(),
                MAX_SSID_BYTES
            ),
        ));
    }

    None
}

/// Checks a network password. Returns at most one issue.
///
/// Accepts an 8-63 character printable-ASCII passphrase or a 64 digit hex
/// key. An empty password is allowed with a warning (open network). Messages
/// describe the shape of the value, never the value itself.
pub fn check_password(value: &str) -> Option<ValidationIssue> {
    if value.is_empty() {
        return Some(ValidationIssue::new(
            ConfigField::NetworkPassword,
            IssueKind::OpenNetwork,
            "password is empty; only an open (unauthenticated) network will accept this",
        ));
    }

    if !value.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
        return Some(ValidationIssue::new(
            ConfigField::NetworkPassword,
            IssueKind::InvalidPassword,
            "password must contain only printable ASCII characters",
        ));
    }

    let len = value.len();
    if len == RAW_PSK_HEX_LEN {
        if value.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return Some(ValidationIssue::new(
            ConfigField::NetworkPassword,
            IssueKind::InvalidPassword,
            format!(
                "a {RAW_PSK_HEX_LEN} character password is read as a raw key and must be hexadecimal"
            ),
        ));
    }

    if !(MIN_PASSPHRASE_LEN..=MAX_PASSPHRASE_LEN).contains(&len) {
        return Some(ValidationIssue::new(
            ConfigField::NetworkPassword,
            IssueKind::InvalidPassword,
            format!(
                "password is {len} characters long; WPA2 passphrases must be {MIN_PASSPHRASE_LEN}-{MAX_PASSPHRASE_LEN} characters"
            ),
        ));
    }

    None
}
