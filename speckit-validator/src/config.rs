//! Configuration for a validation run.
//!
//! The rule tables themselves are fixed at build time; only the input list
//! and read limits vary between runs. Populating this from the command line
//! is a CLI concern, not something the library does on its own.

use std::path::PathBuf;

/// Options for [`validate_paths`](crate::validate_paths).
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ValidationConfig {
    /// Files to validate, in the order they were supplied.
    /// Files whose base name is not `spec.md`, `plan.md` or `tasks.md` are skipped.
    pub paths: Vec<PathBuf>,
    /// Maximum file size in bytes; `None` (the default) reads files whole.
    pub max_file_size: Option<u64>,
}

impl ValidationConfig {
    /// Config for the given paths with no size limit.
    #[must_use]
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            ..Self::default()
        }
    }
}
