use serde::Serialize;
use ventore_core::entities::{CapTableEntry, DataModel};
use ventore_model::insights::{DEFAULT_STAGE_COUNT_LIMIT, DEFAULT_STUCK_LIMIT};
use ventore_model::{project_stage_counts, status_counts, stuck_entries};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{PipelineArgs, PipelineView};
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

/// A stuck cap-table line, trimmed to the columns worth chasing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StuckRow<'a> {
    pub id: &'a str,
    pub project: &'a str,
    pub investor: &'a str,
    pub status: &'a str,
    pub quantity: f64,
    pub total_signed_value: f64,
}

impl<'a> From<&'a CapTableEntry> for StuckRow<'a> {
    fn from(entry: &'a CapTableEntry) -> Self {
        Self {
            id: &entry.id,
            project: &entry.project,
            investor: &entry.investor_name,
            status: &entry.status,
            quantity: entry.quantity(),
            total_signed_value: entry.total_signed_value,
        }
    }
}

pub fn stuck_rows(model: &DataModel, limit: usize) -> Vec<StuckRow<'_>> {
    stuck_entries(model, limit)
        .into_iter()
        .map(StuckRow::from)
        .collect()
}

/// Handle `ventore pipeline`.
pub async fn handle(args: &PipelineArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let model = ctx.build_model().await?;
    match args.view {
        PipelineView::Stuck => {
            let limit = effective_limit(None, flags.limit, u32::try_from(DEFAULT_STUCK_LIMIT)?);
            output(&stuck_rows(&model, limit), flags.format)
        }
        PipelineView::Statuses => {
            let mut counts = status_counts(&model);
            apply_limit(&mut counts, flags.limit);
            output(&counts, flags.format)
        }
        PipelineView::Stages => {
            let limit = effective_limit(
                None,
                flags.limit,
                u32::try_from(DEFAULT_STAGE_COUNT_LIMIT)?,
            );
            output(&project_stage_counts(&model, limit), flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::stuck_rows;
    use crate::commands::shared::fixture;

    #[test]
    fn stuck_rows_carry_quantity() {
        let model = fixture::model();
        let rows = stuck_rows(&model, 50);
        let ids: Vec<_> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec!["A1", "P1", "P1"]);
        assert_eq!(rows[0].quantity, 100.0);
        assert_eq!(rows[1].investor, "Globex");
    }

    #[test]
    fn stuck_rows_respect_limit() {
        assert_eq!(stuck_rows(&fixture::model(), 1).len(), 1);
    }
}
