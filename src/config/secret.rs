//! Redacting wrapper for secret configuration values.

use std::fmt;

use crate::config::constants::{EMPTY_SECRET, REDACTED};

/// A secret string (the WiFi password).
///
/// `Debug` and `Display` never reveal the value. Consumers that genuinely need
/// the clear text call [`Secret::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wraps a value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the clear-text value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the secret is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Partially masked rendering for diagnostics.
    ///
    /// Shows the first and last two characters of values longer than four
    /// characters (`s3***23`), `***` for shorter values and `[EMPTY]` for the
    /// empty string.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        match chars.len() {
            0 => EMPTY_SECRET.to_string(),
            1..=4 => "***".to_string(),
            n => {
                let head: String = chars[..2].iter().collect();
                let tail: String = chars[n - 2..].iter().collect();
                format!("{head}***{tail}")
            }
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({REDACTED})")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
