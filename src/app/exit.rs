//! Exit-code policy for `check` and `compiled`.

use crate::config::FailOn;
use crate::validation::ValidationReport;

/// Everything succeeded.
pub const EXIT_OK: i32 = 0;
/// The configuration could not be loaded or written.
pub const EXIT_LOAD_FAILURE: i32 = 1;
/// Validation failed under the `--fail-on` policy.
pub const EXIT_VALIDATION_FAILURE: i32 = 2;

/// Maps a validation report to an exit code.
pub fn evaluate_exit_code(fail_on: FailOn, report: &ValidationReport) -> i32 {
    match fail_on {
        FailOn::Never => EXIT_OK,
        FailOn::Errors => {
            if report.is_valid() {
                EXIT_OK
            } else {
                EXIT_VALIDATION_FAILURE
            }
        }
        FailOn::Warnings => {
            if report.is_valid() && !report.has_warnings() {
                EXIT_OK
            } else {
                EXIT_VALIDATION_FAILURE
            }
        }
    }
}
