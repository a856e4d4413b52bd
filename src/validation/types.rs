//! Validation issue and report types.

use std::fmt;

use strum_macros::EnumIter as EnumIterMacro;

use crate::config::ConfigField;

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Usable, but worth attention
    Warning,
    /// The consumer must not proceed with this value
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum IssueKind {
    /// Value left at a template default
    Placeholder,
    /// Required value is blank
    Empty,
    /// SSID too long
    InvalidNetworkName,
    /// Password does not fit WPA2-Personal rules
    InvalidPassword,
    /// Empty password, the network has no authentication
    OpenNetwork,
    /// Endpoint is not a usable http(s) URL
    InvalidUrl,
    /// Endpoint uses plain http
    InsecureScheme,
}

impl IssueKind {
    /// Severity this kind is always reported with.
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::OpenNetwork | IssueKind::InsecureScheme => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Short human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Placeholder => "Unconfigured placeholder",
            IssueKind::Empty => "Empty value",
            IssueKind::InvalidNetworkName => "Invalid network name",
            IssueKind::InvalidPassword => "Invalid network password",
            IssueKind::OpenNetwork => "Open network",
            IssueKind::InvalidUrl => "Invalid URL",
            IssueKind::InsecureScheme => "Insecure scheme",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Field the issue belongs to
    pub field: ConfigField,
    /// Category
    pub kind: IssueKind,
    /// Severity, derived from `kind`
    pub severity: Severity,
    /// Human-readable explanation. Never contains the password.
    pub message: String,
}

impl ValidationIssue {
    /// Creates an issue with the severity of `kind`.
    pub fn new(field: ConfigField, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            severity: kind.severity(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity, self.field, self.kind, self.message
        )
    }
}

/// All issues found in one configuration, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an issue.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Every issue.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Issues with `Severity::Error`.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
    }

    /// Issues with `Severity::Warning`.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// `true` when no errors were found. Warnings are allowed.
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    /// `true` when at least one warning was found.
    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    /// Fields still holding a placeholder value.
    pub fn placeholder_fields(&self) -> Vec<ConfigField> {
        self.issues
            .iter()
            .filter(|i| i.kind == IssueKind::Placeholder)
            .map(|i| i.field)
            .collect()
    }

    /// Issues for one field.
    pub fn for_field(&self, field: ConfigField) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_open_network_and_insecure_scheme_are_warnings() {
        let warnings: Vec<IssueKind> = IssueKind::iter()
            .filter(|k| k.severity() == Severity::Warning)
            .collect();
        assert_eq!(
            warnings,
            vec![IssueKind::OpenNetwork, IssueKind::InsecureScheme]
        );
    }

    #[test]
    fn test_issue_kind_labels_are_unique() {
        let mut labels: Vec<&str> = IssueKind::iter().map(|k| k.as_str()).collect();
        let total = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), total);
    }

    #[test]
    fn test_report_with_only_warnings_is_valid() {
        let mut report = ValidationReport::new();
        report.push(ValidationIssue::new(
            ConfigField::AlertEndpoint,
            IssueKind::InsecureScheme,
            "uses plain http",
        ));
        assert!(report.is_valid());
        assert!(report.has_warnings());
        assert_eq!(report.errors().count(), 0);
    }

    #[test]
    fn test_report_with_error_is_invalid() {
        let mut report = ValidationReport::new();
        report.push(ValidationIssue::new(
            ConfigField::NetworkName,
            IssueKind::Placeholder,
            "still the template value",
        ));
        assert!(!report.is_valid());
        assert_eq!(report.placeholder_fields(), vec![ConfigField::NetworkName]);
        assert_eq!(report.for_field(ConfigField::NetworkName).count(), 1);
        assert_eq!(report.for_field(ConfigField::AlertEndpoint).count(), 0);
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::new(
            ConfigField::AlertEndpoint,
            IssueKind::InvalidUrl,
            "'not a url' is not a valid URL",
        );
        assert_eq!(
            issue.to_string(),
            "error [alert_endpoint] Invalid URL: 'not a url' is not a valid URL"
        );
    }
}
