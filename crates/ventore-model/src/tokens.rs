//! Parser for free-text "Project" cells.
//!
//! A cell lists project memberships separated by commas. Each segment is one
//! of:
//!
//! ```text
//! ARIA (Stage 2)     name + parenthesized stage
//! ARIA(Stage 2)
//! Polarity - Stage 1 name + dash + "stage N" (hyphen, en dash or em dash)
//! RUNE               bare name, stage "Unspecified"
//! ```
//!
//! Stages containing `stage N` anywhere are canonicalized to `Stage N`;
//! other labels are kept verbatim.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use ventore_core::UNSPECIFIED_STAGE;
use ventore_core::entities::ProjectStage;

use crate::normalize::{normalize_key, normalize_text};

static PAREN_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\((.+?)\)$").expect("valid paren token regex")
});

static DASH_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)[-\u{2013}\u{2014}]\s*(stage\s*\d+.*)$")
        .expect("valid dash token regex")
});

static STAGE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)stage\s*(\d+)").expect("valid stage number regex")
});

static CANONICAL_STAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^stage\s+\d+").expect("valid canonical stage regex")
});

/// Canonical form of a stage label.
#[must_use]
pub fn normalize_stage(stage: &str) -> String {
    let stage = normalize_text(stage);
    if stage.is_empty() {
        return UNSPECIFIED_STAGE.to_string();
    }
    match STAGE_NUMBER.captures(&stage) {
        Some(caps) => format!("Stage {}", &caps[1]),
        None => stage,
    }
}

/// Whether `stage` is `Unspecified` or a numbered `Stage N` label.
#[must_use]
pub fn is_recognized_stage(stage: &str) -> bool {
    stage == UNSPECIFIED_STAGE || CANONICAL_STAGE.is_match(stage)
}

/// Split one segment into `(project name, canonical stage)`.
#[must_use]
pub fn parse_project_token(token: &str) -> (String, String) {
    let raw = normalize_text(token);
    if raw.is_empty() {
        return (String::new(), UNSPECIFIED_STAGE.to_string());
    }

    if let Some(caps) = PAREN_TOKEN.captures(&raw) {
        return (normalize_text(&caps[1]), normalize_stage(&caps[2]));
    }
    if let Some(caps) = DASH_TOKEN.captures(&raw) {
        return (normalize_text(&caps[1]), normalize_stage(&caps[2]));
    }
    (raw, UNSPECIFIED_STAGE.to_string())
}

/// Parse a project-list cell into distinct `(project, stage)` pairs in order
/// of first appearance.
#[must_use]
pub fn parse_projects_list(text: &str) -> Vec<ProjectStage> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for part in text.split(',').map(normalize_text) {
        if part.is_empty() {
            continue;
        }
        let (project_name, stage) = parse_project_token(&part);
        let project_key = normalize_key(&project_name);
        if project_key.is_empty() {
            continue;
        }
        let stage_key = normalize_key(&stage);
        if !seen.insert((project_key.clone(), stage_key.clone())) {
            continue;
        }
        out.push(ProjectStage {
            project_raw: part,
            project_name,
            project_key,
            stage,
            stage_key,
        });
    }

    out
}
