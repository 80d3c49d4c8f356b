//! Entity structs for the reconciled Ventore model.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Field
//! names serialize as camelCase so JSON consumers see the same shape as the
//! published dashboard.

mod cap_table;
mod compliance;
mod investor;
mod issue;
mod model;
mod project;

pub use cap_table::{CapTableEntry, InvoiceFlags};
pub use compliance::{ComplianceFlags, ComplianceRow};
pub use investor::{Investor, ProjectStage};
pub use issue::DataQualityIssue;
pub use model::DataModel;
pub use project::{ProjectSummary, StageSummary};
