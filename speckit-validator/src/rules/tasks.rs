//! Rules for `tasks.md`.
//!
//! Besides the required headings, every checklist line (anything starting
//! with `- [` once leading whitespace is removed) must follow the canonical
//! task grammar:
//!
//! ```text
//! - [ ] T001 [P1] [US-002] Implement parser
//! ^^^^^ ^^^^ ^^^^ ^^^^^^^^ ^^^^^^^^^^^^^^^^
//! box   id   opt  story    description
//! ```
//!
//! The box is `[ ]` or `[X]`, the parallel marker is `[P]` or `[P<digit>]`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Scope, ValidationError, ViolationKind};
use crate::rules::{ContentCheck, RuleSet, compile};
use crate::strategy::DocumentKind;

/// Required headings, in reporting order.
pub const TASKS_HEADINGS: &[&str] = &[
    r"^##\s+Agent Execution Contract",
    r"^##\s+Traceability Summary",
    concat!(r"^##\s+Definition of Ready ", "\u{2014}", " Tasks"),
];

const CHECKLIST_PREFIX: &str = "- [";

static TASK_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^- \[[ X]\] T\d{3}\s(\[P\d?\]\s)?\[US-\d{3}\]\s.+"));

pub(crate) static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    const CHECKS: &[ContentCheck] = &[check_task_lines];
    RuleSet::new(DocumentKind::Tasks, TASKS_HEADINGS, CHECKS)
});

/// Characters that end a line. Besides `\n` and `\r` this covers the
/// vertical tab, form feed, the C0 file/group/record separators, NEL and the
/// Unicode line and paragraph separators.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split `text` into lines on every line break, counting `\r\n` once.
///
/// A break at the very end does not produce a trailing empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Whether an already trimmed checklist line follows the canonical grammar.
#[must_use]
pub fn is_canonical_task_line(trimmed: &str) -> bool {
    TASK_LINE.is_match(trimmed)
}

/// Report every checklist line that does not follow the canonical grammar.
#[must_use]
pub fn check_task_lines(text: &str, path: &Path) -> Vec<ValidationError> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .filter(|(_, line)| line.trim_start().starts_with(CHECKLIST_PREFIX))
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if is_canonical_task_line(trimmed) {
                return None;
            }
            let line_number = idx + 1;
            Some(ValidationError::at_line(
                path.to_owned(),
                Scope::Tasks,
                ViolationKind::TaskLineFormat,
                line_number,
                format!("Line {line_number} fails canonical format: {trimmed}"),
            ))
        })
        .collect()
}
