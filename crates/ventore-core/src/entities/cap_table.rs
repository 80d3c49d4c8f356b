use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Invoice and issuance checkpoints tracked per cap-table line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFlags {
    pub cc01_invoice_sent: bool,
    pub cc01_payment_received: bool,
    pub cc02_invoice_sent: bool,
    pub cc02_payment_received: bool,
    pub shares_issued: bool,
}

impl InvoiceFlags {
    /// Whether either capital call has been invoiced.
    #[must_use]
    pub const fn any_invoice_sent(&self) -> bool {
        self.cc01_invoice_sent || self.cc02_invoice_sent
    }
}

/// One signed, pending or reserved investment line from a project cap table.
///
/// `investor_key` is `rid:<investor id>` when the row matched a master-list
/// investor by name, otherwise the row's own name-derived key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CapTableEntry {
    pub id: String,
    pub project: String,
    pub project_key: String,
    pub stage: String,
    pub stage_key: String,
    pub investment_type: String,
    pub status: String,
    pub contract_number: String,
    pub reserved: f64,
    pub pending: f64,
    pub signed: f64,
    pub sold: f64,
    pub total_signed_value: f64,
    pub notes: String,
    pub investor_name: String,
    pub investor_key: String,
    pub tracker_id: String,
    pub invoices: InvoiceFlags,
}

impl CapTableEntry {
    /// Sum of the share/block quantity columns.
    #[must_use]
    pub fn quantity(&self) -> f64 {
        self.reserved + self.pending + self.sold + self.signed
    }
}
