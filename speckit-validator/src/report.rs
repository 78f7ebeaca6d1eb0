//! Validation report types.

use serde::Serialize;

use crate::error::ValidationError;

/// Result of a validation run.
///
/// `errors` keeps append order: files in the order they were given, and
/// within each file heading checks before content checks.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of recognized files that were read and checked.
    pub validated_files: usize,
    /// Number of files skipped because their name matched no rule set.
    pub skipped_files: usize,
    /// Whether every validated file passed.
    pub ok: bool,
    /// Every violation found, across all files.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Build a report; `ok` is derived from `errors`.
    #[must_use]
    pub fn from_errors(
        validated_files: usize,
        skipped_files: usize,
        errors: Vec<ValidationError>,
    ) -> Self {
        Self {
            validated_files,
            skipped_files,
            ok: errors.is_empty(),
            errors,
        }
    }

    /// Total number of paths considered (validated + skipped).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.validated_files + self.skipped_files
    }

    /// Number of validation errors found.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.errors.len()
    }
}
