use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// KYC/AML checklist columns of the compliance register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceFlags {
    pub compliance_hub_sent: bool,
    pub kyc_form: bool,
    pub passport: bool,
    pub address: bool,
    pub linkedin_cv: bool,
    pub aml_form: bool,
    pub all_aml_docs_provided: bool,
    pub company_kyc: bool,
    pub verified: bool,
    pub approved_by_adgm: bool,
    pub share_certificate_issued: bool,
}

/// One compliance-tracking line.
///
/// `cap_table_record_id` is a soft reference into [`super::CapTableEntry::id`];
/// dangling references are reported as issues, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRow {
    pub id: String,
    pub project: String,
    pub project_key: String,
    pub stage: String,
    pub stage_key: String,
    pub investment_type: String,
    pub investor_name: String,
    pub investor_key: String,
    pub cap_table_record_id: String,
    pub flags: ComplianceFlags,
    pub next_steps: String,
}
