//! Rule sets for spec kit documents.
//!
//! Each document kind owns one [`RuleSet`]: an ordered list of required
//! `##` headings followed by zero or more content checks. Rule sets are
//! compiled once on first use and never mutated afterwards.
//!
//! - `spec`: required headings and the unpadded-ID heuristic
//! - `plan`: required headings and RT-ID presence in the evidence map
//! - `tasks`: required headings and the canonical checklist-line grammar

pub mod plan;
pub mod spec;
pub mod tasks;

use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::error::{ValidationError, ViolationKind};
use crate::strategy::DocumentKind;

/// A content check run after the heading checks.
pub type ContentCheck = fn(&str, &Path) -> Vec<ValidationError>;

/// A required heading: its source pattern (echoed in messages) and the
/// compiled, multi-line anchored regex.
#[derive(Debug)]
pub struct HeadingRule {
    pub pattern: &'static str,
    regex: Regex,
}

impl HeadingRule {
    fn new(pattern: &'static str) -> Self {
        match RegexBuilder::new(pattern).multi_line(true).build() {
            Ok(regex) => Self { pattern, regex },
            Err(err) => panic!("Invalid heading regex {pattern}: {err}"),
        }
    }

    /// Whether the heading occurs at the start of any line of `text`.
    #[must_use]
    pub fn is_present(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Headings plus content checks for one document kind.
#[derive(Debug)]
pub struct RuleSet {
    pub kind: DocumentKind,
    pub headings: Vec<HeadingRule>,
    pub content_checks: &'static [ContentCheck],
}

impl RuleSet {
    pub(crate) fn new(
        kind: DocumentKind,
        heading_patterns: &[&'static str],
        content_checks: &'static [ContentCheck],
    ) -> Self {
        Self {
            kind,
            headings: heading_patterns
                .iter()
                .map(|&pattern| HeadingRule::new(pattern))
                .collect(),
            content_checks,
        }
    }

    /// Run every rule against `text`: headings first, then content checks.
    #[must_use]
    pub fn apply(&self, text: &str, path: &Path) -> Vec<ValidationError> {
        let mut errors = self.missing_headings(text, path);
        for check in self.content_checks {
            errors.extend(check(text, path));
        }
        errors
    }

    fn missing_headings(&self, text: &str, path: &Path) -> Vec<ValidationError> {
        self.headings
            .iter()
            .filter(|heading| !heading.is_present(text))
            .map(|heading| {
                ValidationError::document(
                    path.to_owned(),
                    self.kind.scope(),
                    ViolationKind::MissingHeading,
                    format!("Missing heading: {}", heading.pattern),
                )
            })
            .collect()
    }
}

/// The rule set for a document kind.
#[must_use]
pub fn rule_set(kind: DocumentKind) -> &'static RuleSet {
    match kind {
        DocumentKind::Spec => &spec::RULES,
        DocumentKind::Plan => &plan::RULES,
        DocumentKind::Tasks => &tasks::RULES,
    }
}

/// Compile a single-purpose content regex, panicking on a malformed literal.
pub(crate) fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid rule regex {pattern}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_matches_at_line_start_only() {
        let rule = HeadingRule::new(r"^##\s+Requirements");
        assert!(rule.is_present("# Spec\n\n## Requirements\n"));
        assert!(rule.is_present("##   Requirements"));
        assert!(!rule.is_present("see ## Requirements inline"));
        assert!(!rule.is_present("## requirements"));
    }

    #[test]
    fn test_rule_sets_keep_heading_order() {
        let spec = rule_set(DocumentKind::Spec);
        assert_eq!(spec.kind, DocumentKind::Spec);
        assert_eq!(spec.headings.len(), 5);
        assert_eq!(spec.headings[2].pattern, r"^##\s+Requirements");

        assert_eq!(rule_set(DocumentKind::Plan).headings.len(), 4);
        assert_eq!(rule_set(DocumentKind::Tasks).headings.len(), 3);
    }

    #[test]
    fn test_apply_reports_headings_before_content() {
        let errors = rule_set(DocumentKind::Plan).apply("", Path::new("plan.md"));
        let kinds: Vec<ViolationKind> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::MissingHeading,
                ViolationKind::MissingHeading,
                ViolationKind::MissingHeading,
                ViolationKind::MissingHeading,
                ViolationKind::MissingSection,
            ]
        );
    }
}
