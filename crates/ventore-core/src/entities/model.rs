use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CapTableEntry, ComplianceRow, DataQualityIssue, Investor, ProjectSummary};

/// The reconciled model handed to consumers. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataModel {
    pub fetched_at: DateTime<Utc>,
    pub investors: Vec<Investor>,
    pub cap_table: Vec<CapTableEntry>,
    pub compliance: Vec<ComplianceRow>,
    pub projects: Vec<ProjectSummary>,
    pub issues: Vec<DataQualityIssue>,
}

impl DataModel {
    /// Look up an investor by id.
    #[must_use]
    pub fn investor(&self, id: &str) -> Option<&Investor> {
        self.investors.iter().find(|investor| investor.id == id)
    }

    /// Look up a cap-table entry by id (first occurrence if duplicated).
    #[must_use]
    pub fn cap_table_entry(&self, id: &str) -> Option<&CapTableEntry> {
        self.cap_table.iter().find(|entry| entry.id == id)
    }
}
