//! Source, issue-kind and severity enums for Ventore.
//!
//! Issue kinds serialize as kebab-case and severities as lowercase, matching
//! the labels consumers already filter on.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// SourceKind
// ---------------------------------------------------------------------------

/// One of the five published spreadsheets the model is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Master,
    Rune,
    Aria,
    Polarity,
    Compliance,
}

impl SourceKind {
    /// Every source, in build order.
    pub const ALL: [Self; 5] = [
        Self::Master,
        Self::Rune,
        Self::Aria,
        Self::Polarity,
        Self::Compliance,
    ];

    /// Cap-table sources, in the order their rows are combined.
    pub const CAP_TABLES: [Self; 3] = [Self::Rune, Self::Aria, Self::Polarity];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Rune => "rune",
            Self::Aria => "aria",
            Self::Polarity => "polarity",
            Self::Compliance => "compliance",
        }
    }

    /// Upper-case project name for cap-table sources.
    #[must_use]
    pub const fn project_name(self) -> Option<&'static str> {
        match self {
            Self::Rune => Some("RUNE"),
            Self::Aria => Some("ARIA"),
            Self::Polarity => Some("POLARITY"),
            Self::Master | Self::Compliance => None,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| CoreError::Validation(format!("unknown source '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// IssueKind
// ---------------------------------------------------------------------------

/// Closed set of data-quality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    MissingInvestorId,
    UnknownStage,
    DuplicateCapTableId,
    UnmatchedCompliance,
    MissingProject,
}

impl IssueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingInvestorId => "missing-investor-id",
            Self::UnknownStage => "unknown-stage",
            Self::DuplicateCapTableId => "duplicate-cap-table-id",
            Self::UnmatchedCompliance => "unmatched-compliance",
            Self::MissingProject => "missing-project",
        }
    }

    /// Severity every issue of this kind is reported with.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::DuplicateCapTableId => Severity::High,
            Self::MissingInvestorId | Self::UnmatchedCompliance => Severity::Medium,
            Self::UnknownStage | Self::MissingProject => Severity::Low,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a data-quality issue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(CoreError::Validation(format!("unknown severity '{s}'"))),
        }
    }
}
