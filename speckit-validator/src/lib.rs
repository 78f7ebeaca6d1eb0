//! # speckit-validator
//!
//! Structural linter for spec kit Markdown documents.
//!
//! Files are classified by base name (`spec.md`, `plan.md`, `tasks.md`) and
//! checked against a fixed rule set: required `##` headings plus a few
//! line-format rules. Every violation is collected; the run never stops at
//! the first one.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use speckit_validator::{ValidationConfig, validate_paths};
//!
//! let config = ValidationConfig::new(vec![
//!     PathBuf::from("specs/001-parser/spec.md"),
//!     PathBuf::from("specs/001-parser/plan.md"),
//!     PathBuf::from("specs/001-parser/tasks.md"),
//! ]);
//!
//! let report = validate_paths(&config).unwrap();
//! println!("Files validated: {}", report.validated_files);
//! println!("Validation errors: {}", report.errors_count());
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
pub mod output;
mod report;
pub mod rules;
mod strategy;

use std::path::Path;

pub use config::ValidationConfig;
pub use error::{ScanError, Scope, ValidationError, ViolationKind};
pub use report::ValidationReport;
pub use strategy::DocumentKind;
pub use strategy::fs::{decode_tolerant, document_kind_for};

use strategy::fs::read_file_tolerant;

/// Validate spec kit documents on disk.
///
/// Paths are processed strictly in order. Names other than `spec.md`,
/// `plan.md` and `tasks.md` (case-insensitive) are skipped without being
/// read. Undecodable bytes are dropped rather than reported.
///
/// # Errors
///
/// Returns a `ScanError` if a recognized file cannot be opened or read, or
/// exceeds `config.max_file_size` when one is set. No report is produced in that case.
pub fn validate_paths(config: &ValidationConfig) -> Result<ValidationReport, ScanError> {
    let mut errors = Vec::new();
    let mut validated_files: usize = 0;
    let mut skipped_files: usize = 0;

    for path in &config.paths {
        let Some(kind) = document_kind_for(path) else {
            tracing::debug!(path = %path.display(), "skipping file with no matching rule set");
            skipped_files += 1;
            continue;
        };

        let text = read_file_tolerant(path, config.max_file_size)?;
        let file_errors = validate_document(kind, path, &text);
        tracing::debug!(
            path = %path.display(),
            scope = %kind.scope(),
            errors = file_errors.len(),
            "validated document"
        );

        validated_files += 1;
        errors.extend(file_errors);
    }

    let report = ValidationReport::from_errors(validated_files, skipped_files, errors);
    tracing::info!(
        validated = report.validated_files,
        skipped = report.skipped_files,
        errors = report.errors_count(),
        "validation finished"
    );
    Ok(report)
}

/// Validate in-memory document text against the rule set for `kind`.
///
/// `path` is only recorded on the produced errors.
#[must_use]
pub fn validate_document(kind: DocumentKind, path: &Path, text: &str) -> Vec<ValidationError> {
    rules::rule_set(kind).apply(text, path)
}
