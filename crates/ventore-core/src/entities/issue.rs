use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{IssueKind, Severity};

/// A business-data problem found while building the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DataQualityIssue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    /// Human-readable pointer at the offending row (usually a name).
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl DataQualityIssue {
    /// Build an issue with the kind's standard severity.
    #[must_use]
    pub fn new(kind: IssueKind, message: impl Into<String>, reference: Option<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message: message.into(),
            reference,
        }
    }
}
