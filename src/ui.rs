//! Formatting functions for user-facing status lines.
//!
//! Everything here writes to stderr. Stdout is reserved for the computed
//! version so a pipeline can capture it directly.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::WorkflowResult;

/// Error line, red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Success line, green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Status line, yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Warning line for a boundary condition.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// Lines describing a workflow result: each warning, then the outcome.
pub fn format_result(result: &WorkflowResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .warnings
        .iter()
        .map(format_boundary_warning)
        .collect();

    if result.created {
        lines.push(format_success(&format!(
            "Created tag {} for version {}",
            style(&result.tag).cyan(),
            result.version
        )));
    } else {
        lines.push(format_status(&format!(
            "Next version: {} (tag {})",
            style(result.version).green().bold(),
            result.tag
        )));
    }

    lines
}

pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Display every warning of a workflow result, then the outcome.
pub fn display_result(result: &WorkflowResult) {
    for line in format_result(result) {
        eprintln!("{}", line);
    }
}
