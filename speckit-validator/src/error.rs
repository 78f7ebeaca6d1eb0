//! Error types for spec kit document validation.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// The document family a validation error belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Spec,
    Plan,
    Tasks,
}

impl Scope {
    /// Lower-case tag used in error messages (`spec`, `plan`, `tasks`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spec => "spec",
            Self::Plan => "plan",
            Self::Tasks => "tasks",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of rule a document violated.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ViolationKind {
    /// A required `##` heading is absent.
    MissingHeading,
    /// A section the content checks depend on could not be located.
    MissingSection,
    /// An identifier family is only used without zero-padding.
    UnpaddedId,
    /// The evidence section carries no `RT-<digits>` token.
    MissingTraceabilityId,
    /// A checklist line does not follow the canonical task grammar.
    TaskLineFormat,
}

/// A single rule violation found in a spec kit document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationError {
    /// File path where the error was found
    pub file: PathBuf,
    /// Document family of the rule that fired
    pub scope: Scope,
    /// Rule category
    pub kind: ViolationKind,
    /// Line number (1-indexed) for line-level findings; 0 for document-level ones
    pub line: usize,
    /// Human-readable error description, without the scope tag
    pub message: String,
}

impl ValidationError {
    /// A document-level finding (`line` is 0).
    #[must_use]
    pub fn document(
        file: PathBuf,
        scope: Scope,
        kind: ViolationKind,
        message: String,
    ) -> Self {
        Self {
            file,
            scope,
            kind,
            line: 0,
            message,
        }
    }

    /// A finding tied to a 1-based line number.
    #[must_use]
    pub fn at_line(
        file: PathBuf,
        scope: Scope,
        kind: ViolationKind,
        line: usize,
        message: String,
    ) -> Self {
        Self {
            file,
            scope,
            kind,
            line,
            message,
        }
    }

    /// Format the error the way the report prints it: `[{scope}] {message}`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.scope, self.message)
    }
}

/// A recognized document that could not be read at all.
///
/// Undecodable bytes never produce a `ScanError`; they are dropped while
/// decoding. Only genuine I/O failures and size-limit breaches do.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ScanError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} exceeds maximum size of {limit} bytes", path.display())]
    FileTooLarge { path: PathBuf, limit: u64 },
}

impl ScanError {
    /// The path that could not be read.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::FileTooLarge { path, .. } => path,
        }
    }
}
