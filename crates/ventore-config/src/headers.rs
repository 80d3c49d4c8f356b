//! Header-name candidates for every logical sheet field.
//!
//! Spreadsheet columns get renamed and re-cased over time. Each field lists
//! the names it may appear under; lookups normalize case and whitespace, so
//! only genuinely different names need an entry. Lists are tried in order
//! and the first header present in a row wins.
//!
//! Cap-table candidates may contain the `{project}` placeholder, replaced
//! with the upper-case project name of the tab being read.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the cap-table project name.
pub const PROJECT_PLACEHOLDER: &str = "{project}";

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| (*name).to_string()).collect()
}

/// Expand `{project}` placeholders for one cap-table tab.
#[must_use]
pub fn expand_for_project(candidates: &[String], project: &str) -> Vec<String> {
    candidates
        .iter()
        .map(|candidate| candidate.replace(PROJECT_PLACEHOLDER, project))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeaderMap {
    #[serde(default)]
    pub master: MasterHeaders,
    #[serde(default)]
    pub cap_table: CapTableHeaders,
    #[serde(default)]
    pub compliance: ComplianceHeaders,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MasterHeaders {
    pub record_id: Vec<String>,
    pub legal_name: Vec<String>,
    pub known_name: Vec<String>,
    pub project: Vec<String>,
    pub intake_form: Vec<String>,
}

impl Default for MasterHeaders {
    fn default() -> Self {
        Self {
            record_id: names(&["Record ID"]),
            legal_name: names(&["Legal Investment Name"]),
            known_name: names(&["Known Name"]),
            project: names(&["Project"]),
            intake_form: names(&["Investor Intake Form"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CapTableHeaders {
    pub record_id: Vec<String>,
    pub legal_name: Vec<String>,
    pub known_name: Vec<String>,
    pub investment_type: Vec<String>,
    pub status: Vec<String>,
    pub contract_number: Vec<String>,
    pub reserved: Vec<String>,
    pub pending: Vec<String>,
    pub signed: Vec<String>,
    pub sold: Vec<String>,
    pub total_signed_value: Vec<String>,
    pub notes: Vec<String>,
    pub tracker_id: Vec<String>,
    pub cc01_invoice_sent: Vec<String>,
    pub cc01_payment_received: Vec<String>,
    pub cc02_invoice_sent: Vec<String>,
    pub cc02_payment_received: Vec<String>,
    pub shares_issued: Vec<String>,
}

impl Default for CapTableHeaders {
    fn default() -> Self {
        Self {
            record_id: names(&["Record ID"]),
            legal_name: names(&["Legal Investment Name"]),
            known_name: names(&["Known Name"]),
            investment_type: names(&["Investment Type"]),
            status: names(&["Status"]),
            contract_number: names(&["Contract Number"]),
            reserved: names(&["Shares Reserved", "Blocks Reserved"]),
            pending: names(&["Shares Pending", "Blocks Pending"]),
            signed: names(&["Shares Signed"]),
            sold: names(&["Blocks Sold"]),
            total_signed_value: names(&["Total Signed Value"]),
            notes: names(&["Notes"]),
            tracker_id: names(&[
                "{project} Compliance Tracker",
                "Compliance Tracker",
                "ARIA Compliance Tracker",
                "RUNE Compliance Tracker",
            ]),
            cc01_invoice_sent: names(&["CC01 Invoice Sent", "Invoice Sent"]),
            cc01_payment_received: names(&["CC01 Payment Received", "Payment Received"]),
            cc02_invoice_sent: names(&["CC02 Invoice Sent"]),
            cc02_payment_received: names(&["CC02 Payment Received"]),
            shares_issued: names(&["Shares Issued"]),
        }
    }
}

impl CapTableHeaders {
    /// Copy of these candidates with `{project}` placeholders expanded.
    #[must_use]
    pub fn for_project(&self, project: &str) -> Self {
        let expand = |list: &Vec<String>| expand_for_project(list, project);
        Self {
            record_id: expand(&self.record_id),
            legal_name: expand(&self.legal_name),
            known_name: expand(&self.known_name),
            investment_type: expand(&self.investment_type),
            status: expand(&self.status),
            contract_number: expand(&self.contract_number),
            reserved: expand(&self.reserved),
            pending: expand(&self.pending),
            signed: expand(&self.signed),
            sold: expand(&self.sold),
            total_signed_value: expand(&self.total_signed_value),
            notes: expand(&self.notes),
            tracker_id: expand(&self.tracker_id),
            cc01_invoice_sent: expand(&self.cc01_invoice_sent),
            cc01_payment_received: expand(&self.cc01_payment_received),
            cc02_invoice_sent: expand(&self.cc02_invoice_sent),
            cc02_payment_received: expand(&self.cc02_payment_received),
            shares_issued: expand(&self.shares_issued),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ComplianceHeaders {
    pub record_id: Vec<String>,
    pub project: Vec<String>,
    pub investment_type: Vec<String>,
    pub investor: Vec<String>,
    pub cap_table_record_id: Vec<String>,
    pub compliance_hub_sent: Vec<String>,
    pub kyc_form: Vec<String>,
    pub passport: Vec<String>,
    pub address: Vec<String>,
    pub linkedin_cv: Vec<String>,
    pub aml_form: Vec<String>,
    pub all_aml_docs_provided: Vec<String>,
    pub company_kyc: Vec<String>,
    pub verified: Vec<String>,
    pub approved_by_adgm: Vec<String>,
    pub share_certificate_issued: Vec<String>,
    pub next_steps: Vec<String>,
}

impl Default for ComplianceHeaders {
    fn default() -> Self {
        Self {
            record_id: names(&["Record ID"]),
            project: names(&["Project"]),
            investment_type: names(&["Investment Type"]),
            investor: names(&["Investor"]),
            cap_table_record_id: names(&["Investor (Cap Table)"]),
            compliance_hub_sent: names(&["Compliance Hub Sent"]),
            kyc_form: names(&["KYC Form"]),
            passport: names(&["Passport"]),
            address: names(&["Address"]),
            linkedin_cv: names(&["LinkedIn/CV"]),
            aml_form: names(&["AML Form"]),
            all_aml_docs_provided: names(&["All AML Docs Provided"]),
            company_kyc: names(&["Company KYC"]),
            verified: names(&["Verified"]),
            approved_by_adgm: names(&["Approved by ADGM"]),
            share_certificate_issued: names(&["Share Certificate Issued"]),
            next_steps: names(&["Next Steps"]),
        }
    }
}
