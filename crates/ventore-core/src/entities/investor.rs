use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One `(project, stage)` membership parsed from a free-text project cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStage {
    /// The comma-separated segment this pair was parsed from.
    pub project_raw: String,
    pub project_name: String,
    /// Lowercased, whitespace-collapsed `project_name`.
    pub project_key: String,
    /// `Stage N`, a literal label, or `Unspecified`.
    pub stage: String,
    pub stage_key: String,
}

/// An investor from the master list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    /// The record id when present, otherwise the name-derived stable key.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    pub legal_name: String,
    pub known_name: String,
    pub display_name: String,
    pub intake_form: String,
    pub projects: Vec<ProjectStage>,
}
