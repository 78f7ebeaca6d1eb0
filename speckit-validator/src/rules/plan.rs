//! Rules for `plan.md`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Scope, ValidationError, ViolationKind};
use crate::rules::{ContentCheck, RuleSet, compile};
use crate::strategy::DocumentKind;

/// Required headings, in reporting order.
pub const PLAN_HEADINGS: &[&str] = &[
    r"^##\s+Evidence-to-Decision Map",
    r"^##\s+Component Map",
    r"^##\s+Interaction Contracts",
    concat!(r"^##\s+Definition of Ready ", "\u{2014}", " Plan"),
];

/// Body of the evidence map: everything after its heading up to the next
/// `##` heading line or the end of the document.
static EVIDENCE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"##\s+Evidence-to-Decision Map([\s\S]+?)(\n##\s+|$)"));

static RT_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"\bRT-\d+\b"));

pub(crate) static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    const CHECKS: &[ContentCheck] = &[check_evidence_map];
    RuleSet::new(DocumentKind::Plan, PLAN_HEADINGS, CHECKS)
});

/// Extract the evidence map body, if the section exists and is non-empty.
#[must_use]
pub fn evidence_section(text: &str) -> Option<&str> {
    EVIDENCE_SECTION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str())
}

/// Require at least one `RT-<digits>` token inside the evidence map.
#[must_use]
pub fn check_evidence_map(text: &str, path: &Path) -> Vec<ValidationError> {
    let error = match evidence_section(text) {
        Some(body) if RT_ID.is_match(body) => return Vec::new(),
        Some(_) => ValidationError::document(
            path.to_owned(),
            Scope::Plan,
            ViolationKind::MissingTraceabilityId,
            "Evidence-to-Decision Map lacks RT-IDs".to_owned(),
        ),
        None => ValidationError::document(
            path.to_owned(),
            Scope::Plan,
            ViolationKind::MissingSection,
            "Evidence-to-Decision Map section not found".to_owned(),
        ),
    };
    vec![error]
}
