use anyhow::bail;
use schemars::Schema;
use ventore_core::entities::{
    CapTableEntry, ComplianceRow, DataModel, DataQualityIssue, Investor, ProjectSummary,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `ventore schema`.
pub const SCHEMA_TYPES: [&str; 6] = [
    "model",
    "investor",
    "cap-table-entry",
    "compliance-row",
    "issue",
    "project",
];

pub fn schema_for(type_name: &str) -> anyhow::Result<Schema> {
    let schema = match type_name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "model" => schemars::schema_for!(DataModel),
        "investor" => schemars::schema_for!(Investor),
        "cap-table-entry" => schemars::schema_for!(CapTableEntry),
        "compliance-row" => schemars::schema_for!(ComplianceRow),
        "issue" => schemars::schema_for!(DataQualityIssue),
        "project" => schemars::schema_for!(ProjectSummary),
        _ => bail!(
            "unknown schema type '{type_name}' (expected one of: {})",
            SCHEMA_TYPES.join(", ")
        ),
    };
    Ok(schema)
}

/// Handle `ventore schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for(&args.type_name)?, flags.format)
}
