use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Investors and cap-table entries observed at one stage of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StageSummary {
    pub stage: String,
    pub stage_key: String,
    /// Investor ids and cap-table investor keys, first-seen order.
    pub investors: Vec<String>,
    /// Cap-table entry ids, first-seen order.
    pub entries: Vec<String>,
}

/// Derived project/stage index entry. Rebuilt on every model build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project: String,
    pub project_key: String,
    pub stages: Vec<StageSummary>,
}
