//! Main application modules.
//!
//! This module provides template generation, summary rendering, and the
//! exit-code policy used by the CLI binary.

pub mod exit;
pub mod report;
pub mod template;

// Re-export public API
pub use exit::{evaluate_exit_code, EXIT_LOAD_FAILURE, EXIT_OK, EXIT_VALIDATION_FAILURE};
pub use report::{log_report, render_summary, verdict_line};
pub use template::{render_template, write_template};
