//! Output formatting for validation reports.
//!
//! The human format is a stable contract parsed by other tooling:
//! `VALIDATION: PASS`, or `VALIDATION: FAIL` followed by one ` - ` line per
//! error. Logging never goes to the same writer.

use std::io::Write;

use crate::report::ValidationReport;

/// First line printed when no violations were found.
pub const PASS_BANNER: &str = "VALIDATION: PASS";
/// First line printed when at least one violation was found.
pub const FAIL_BANNER: &str = "VALIDATION: FAIL";

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as the plain-text PASS/FAIL listing.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.ok {
        writeln!(writer, "{PASS_BANNER}")?;
        return Ok(());
    }

    writeln!(writer, "{FAIL_BANNER}")?;
    for error in &report.errors {
        writeln!(writer, " - {}", error.format_human_readable())?;
    }
    Ok(())
}
