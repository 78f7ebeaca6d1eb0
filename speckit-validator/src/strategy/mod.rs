//! Input strategies.
//!
//! Only the filesystem strategy exists: paths come from the command line and
//! are read from disk one at a time.

pub mod fs;

use crate::error::Scope;

/// Document family, used to dispatch to the matching rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Spec,
    Plan,
    Tasks,
}

impl DocumentKind {
    /// Scope tag carried by every error this document kind produces.
    #[must_use]
    pub fn scope(self) -> Scope {
        match self {
            Self::Spec => Scope::Spec,
            Self::Plan => Scope::Plan,
            Self::Tasks => Scope::Tasks,
        }
    }
}
