//! Rules for `spec.md`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Scope, ValidationError, ViolationKind};
use crate::rules::{ContentCheck, RuleSet, compile};
use crate::strategy::DocumentKind;

/// Required headings, in reporting order.
pub const SPEC_HEADINGS: &[&str] = &[
    r"^##\s+Clarifications \(Resolved\)",
    r"^##\s+Assumptions \(Must Validate in Research\)",
    r"^##\s+Requirements",
    r"^##\s+Success Criteria",
    concat!(r"^##\s+Definition of Ready ", "\u{2014}", " Spec"),
];

/// ID prefixes checked for zero-padding, with their unpadded and padded forms.
const ID_FAMILIES: &[(&str, &str, &str)] = &[
    ("FR-", r"FR-\d\b", r"FR-\d{3}\b"),
    ("SC-", r"SC-\d\b", r"SC-\d{3}\b"),
    ("US-", r"US-\d\b", r"US-\d{3}\b"),
];

struct IdFamily {
    prefix: &'static str,
    unpadded: Regex,
    padded: Regex,
}

static ID_RULES: LazyLock<Vec<IdFamily>> = LazyLock::new(|| {
    ID_FAMILIES
        .iter()
        .map(|&(prefix, unpadded, padded)| IdFamily {
            prefix,
            unpadded: compile(unpadded),
            padded: compile(padded),
        })
        .collect()
});

pub(crate) static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    const CHECKS: &[ContentCheck] = &[check_unpadded_ids];
    RuleSet::new(DocumentKind::Spec, SPEC_HEADINGS, CHECKS)
});

/// Flag an ID family whose single-digit form appears while no three-digit
/// form appears anywhere in the document.
///
/// Only the presence of each form is compared. A document containing both
/// `FR-1` and `FR-002` passes.
#[must_use]
pub fn check_unpadded_ids(text: &str, path: &Path) -> Vec<ValidationError> {
    ID_RULES
        .iter()
        .filter(|family| family.unpadded.is_match(text) && !family.padded.is_match(text))
        .map(|family| {
            ValidationError::document(
                path.to_owned(),
                Scope::Spec,
                ViolationKind::UnpaddedId,
                format!(
                    "Unpadded ID detected for {prefix} (use {prefix}###)",
                    prefix = family.prefix
                ),
            )
        })
        .collect()
}
