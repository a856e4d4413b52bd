//! Alert endpoint URL validation.
//!
//! The endpoint must parse as an absolute `http://` or `https://` URL with a
//! host. Plain http is accepted with a warning: alerts would travel
//! unencrypted. What the consumer sends to the endpoint is not checked here.

use url::Url;

use crate::config::constants::MAX_URL_LENGTH;
use crate::config::ConfigField;
use crate::error_handling::ConfigValidationError;
use crate::validation::types::{IssueKind, ValidationIssue};

/// Checks an endpoint, returning every issue found (at most one error and
/// one warning).
pub fn check_endpoint(value: &str) -> Vec<ValidationIssue> {
    match parse_endpoint(value) {
        Ok(url) if url.scheme() == "http" => vec![ValidationIssue::new(
            ConfigField::AlertEndpoint,
            IssueKind::InsecureScheme,
            format!("'{value}' uses plain http; alerts will be sent unencrypted, prefer https"),
        )],
        Ok(_) => Vec::new(),
        Err(issue) => vec![issue],
    }
}

/// Validates URL syntax of an endpoint and returns the parsed URL.
///
/// # Errors
///
/// Returns a [`ConfigValidationError`] for `alert_endpoint` if the value is
/// empty, too long, unparseable, not http(s), or has no host.
///
/// # Examples
///
/// ```
/// use fire_alert_config::validation::validate_endpoint;
///
/// assert!(validate_endpoint("https://alerts.example.com/fire").is_ok());
/// assert!(validate_endpoint("not a url").is_err());
/// assert!(validate_endpoint("ftp://alerts.example.com/fire").is_err());
/// ```
pub fn validate_endpoint(value: &str) -> Result<Url, ConfigValidationError> {
    parse_endpoint(value).map_err(|issue| ConfigValidationError {
        field: issue.field.name(),
        message: issue.message,
    })
}

fn parse_endpoint(value: &str) -> Result<Url, ValidationIssue> {
    let invalid = |message: String| {
        ValidationIssue::new(ConfigField::AlertEndpoint, IssueKind::InvalidUrl, message)
    };

    if value.trim().is_empty() {
        return Err(ValidationIssue::new(
            ConfigField::AlertEndpoint,
            IssueKind::Empty,
            "alert endpoint is empty; set fire_alert_url to the URL alerts are sent to",
        ));
    }

    if value.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "alert endpoint is {} characters long (maximum {})",
            value.len(),
            MAX_URL_LENGTH
        )));
    }

    let url = Url::parse(value)
        .map_err(|e| invalid(format!("'{value}' is not a valid URL ({e})")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid(format!(
                "unsupported URL scheme '{scheme}' (only http:// and https:// allowed): {value}"
            )));
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(format!("URL has no host component: {value}")));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::types::Severity;

    #[test]
    fn test_https_endpoint_has_no_issues() {
        assert!(check_endpoint("https://alerts.example.com/fire").is_empty());
        assert!(check_endpoint("https://192.0.2.10:8443/hooks/fire?token=abc").is_empty());
    }

    #[test]
    fn test_http_endpoint_is_warning_only() {
        let issues = check_endpoint("http://alerts.example.com/fire");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::InsecureScheme);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_malformed_url_rejected() {
        let issues = check_endpoint("not a url");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::InvalidUrl);
        assert!(issues[0].message.contains("not a valid URL"));
    }

    #[test]
    fn test_unsupported_scheme_rejected() {
        let err = validate_endpoint("file:///etc/passwd").unwrap_err();
        assert_eq!(err.field, "alert_endpoint");
        assert!(err.message.contains("scheme 'file'"));

        assert!(validate_endpoint("mqtt://broker.example.com:1883").is_err());
    }

    #[test]
    fn test_empty_endpoint() {
        let issues = check_endpoint("  ");
        assert_eq!(issues[0].kind, IssueKind::Empty);
    }

    #[test]
    fn test_overlong_endpoint() {
        let long = format!("https://alerts.example.com/{}", "a".repeat(MAX_URL_LENGTH));
        let issues = check_endpoint(&long);
        assert_eq!(issues[0].kind, IssueKind::InvalidUrl);
        assert!(issues[0].message.contains("maximum"));
    }

    #[test]
    fn test_validate_endpoint_returns_parsed_url() {
        let url = validate_endpoint("https://alerts.example.com/fire").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("alerts.example.com"));
    }
}
