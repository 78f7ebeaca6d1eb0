#![allow(dead_code, clippy::unwrap_used)]
//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

pub const SPEC_OK: &str = "\
# Feature: Parser

## Clarifications (Resolved)
- Q1 answered.

## Assumptions (Must Validate in Research)
- Input is UTF-8.

## Requirements
- FR-001 Parse headings.
- FR-002 Report violations.

## Success Criteria
- SC-001 All fixtures pass.

## Definition of Ready \u{2014} Spec
- US-001 reviewed.
";

pub const PLAN_OK: &str = "\
# Plan

## Evidence-to-Decision Map
| Evidence | Decision |
| RT-7 | Use regex rule tables |

## Component Map
- validator

## Interaction Contracts
- cli -> validator

## Definition of Ready \u{2014} Plan
- approved
";

pub const TASKS_OK: &str = "\
# Tasks

## Agent Execution Contract
Work top to bottom.

- [ ] T001 [P1] [US-002] Implement parser
- [X] T002 [US-001] Wire CLI

## Traceability Summary
US-001 -> T002

## Definition of Ready \u{2014} Tasks
- ready
";

/// Write `content` to `dir/name` and return the full path.
pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
