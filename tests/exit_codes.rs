//! Tests for exit code policies (--fail-on flag)

use fire_alert_config::app::{
    evaluate_exit_code, EXIT_LOAD_FAILURE, EXIT_OK, EXIT_VALIDATION_FAILURE,
};
use fire_alert_config::{validate_config, AlertSystemConfig, FailOn, ValidationReport};

fn valid_report() -> ValidationReport {
    validate_config(&AlertSystemConfig::new(
        "HomeNet",
        "s3cret123",
        "https://alerts.example.com/fire",
    ))
}

fn warning_report() -> ValidationReport {
    validate_config(&AlertSystemConfig::new(
        "HomeNet",
        "s3cret123",
        "http://alerts.example.com/fire",
    ))
}

fn error_report() -> ValidationReport {
    validate_config(&AlertSystemConfig::template())
}

#[test]
fn test_fail_on_never_always_returns_zero() {
    for report in [valid_report(), warning_report(), error_report()] {
        assert_eq!(evaluate_exit_code(FailOn::Never, &report), EXIT_OK);
    }
}

#[test]
fn test_fail_on_errors() {
    assert_eq!(evaluate_exit_code(FailOn::Errors, &valid_report()), EXIT_OK);
    assert_eq!(
        evaluate_exit_code(FailOn::Errors, &warning_report()),
        EXIT_OK,
        "Warnings alone should not fail under --fail-on errors"
    );
    assert_eq!(
        evaluate_exit_code(FailOn::Errors, &error_report()),
        EXIT_VALIDATION_FAILURE
    );
}

#[test]
fn test_fail_on_warnings() {
    assert_eq!(evaluate_exit_code(FailOn::Warnings, &valid_report()), EXIT_OK);
    assert_eq!(
        evaluate_exit_code(FailOn::Warnings, &warning_report()),
        EXIT_VALIDATION_FAILURE
    );
    assert_eq!(
        evaluate_exit_code(FailOn::Warnings, &error_report()),
        EXIT_VALIDATION_FAILURE
    );
}

#[test]
fn test_exit_codes_are_distinct() {
    assert_ne!(EXIT_OK, EXIT_LOAD_FAILURE);
    assert_ne!(EXIT_LOAD_FAILURE, EXIT_VALIDATION_FAILURE);
    assert_ne!(EXIT_OK, EXIT_VALIDATION_FAILURE);
}
