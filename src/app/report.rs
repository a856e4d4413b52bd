//! Summary and validation report rendering.

use log::{error, info, warn};
use serde_json::json;
use strum::IntoEnumIterator;

use crate::config::{ConfigField, LoadedConfig, OutputFormat};
use crate::validation::{Severity, ValidationReport};

/// Renders the loaded values (password masked) and where each came from.
pub fn render_summary(loaded: &LoadedConfig, format: OutputFormat) -> String {
    let config = &loaded.config;
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            if let Some(path) = &loaded.path {
                out.push_str(&format!("{:<17} {}\n", "artifact:", path.display()));
            }
            for field in ConfigField::iter() {
                out.push_str(&format!(
                    "{:<17} {} ({})\n",
                    format!("{}:", field.name()),
                    config.display_value(field),
                    loaded.source(field)
                ));
            }
            out
        }
        OutputFormat::Json => {
            let mut fields = serde_json::Map::new();
            for field in ConfigField::iter() {
                fields.insert(
                    field.name().to_string(),
                    json!({
                        "value": config.display_value(field),
                        "source": loaded.source(field).to_string(),
                        "env_var": field.env_var(),
                    }),
                );
            }
            let doc = json!({
                "artifact": loaded.path.as_ref().map(|p| p.display().to_string()),
                "fields": fields,
            });
            serde_json::to_string_pretty(&doc).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Logs every issue at `error` or `warn` level.
pub fn log_report(report: &ValidationReport) {
    for issue in report.issues() {
        match issue.severity {
            Severity::Error => error!("[{}] {}: {}", issue.field, issue.kind, issue.message),
            Severity::Warning => warn!("[{}] {}: {}", issue.field, issue.kind, issue.message),
        }
    }
    if report.issues().is_empty() {
        info!("No configuration issues found");
    }
}

/// One-line verdict for the end of `check`.
pub fn verdict_line(report: &ValidationReport) -> String {
    let errors = report.errors().count();
    let warnings = report.warnings().count();
    match (errors, warnings) {
        (0, 0) => "✅ Configuration is valid".to_string(),
        (0, w) => format!(
            "✅ Configuration is valid ({} warning{})",
            w,
            if w == 1 { "" } else { "s" }
        ),
        (e, w) => format!(
            "❌ Configuration is invalid: {} error{}, {} warning{}",
            e,
            if e == 1 { "" } else { "s" },
            w,
            if w == 1 { "" } else { "s" }
        ),
    }
}
