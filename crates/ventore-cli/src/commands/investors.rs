use anyhow::bail;
use serde::Serialize;
use ventore_core::UNSPECIFIED_STAGE;
use ventore_core::entities::{DataModel, Investor};
use ventore_model::investor_profile;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{InvestorArgs, InvestorsArgs};
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

/// One line of `ventore investors`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub known_name: &'a str,
    pub legal_name: &'a str,
    /// Memberships joined with `, `; the stage is shown only when known.
    pub projects: String,
    pub cap_entries: usize,
}

impl<'a> InvestorRow<'a> {
    fn new(investor: &'a Investor, model: &DataModel) -> Self {
        let rid = format!("rid:{}", investor.id);
        Self {
            id: &investor.id,
            name: &investor.display_name,
            known_name: &investor.known_name,
            legal_name: &investor.legal_name,
            projects: projects_text(investor),
            cap_entries: model
                .cap_table
                .iter()
                .filter(|entry| entry.investor_key == rid)
                .count(),
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        [self.name, self.legal_name, self.known_name, self.projects.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

fn projects_text(investor: &Investor) -> String {
    investor
        .projects
        .iter()
        .map(|ps| {
            if ps.stage == UNSPECIFIED_STAGE {
                ps.project_name.clone()
            } else {
                format!("{} ({})", ps.project_name, ps.stage)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn in_project(investor: &Investor, project: Option<&str>) -> bool {
    project.is_none_or(|project| {
        let project = project.trim().to_lowercase();
        investor
            .projects
            .iter()
            .any(|ps| ps.project_key == project)
    })
}

/// Rows sorted by display name, ignoring case. A blank search keeps every
/// row.
pub fn investor_rows<'a>(model: &'a DataModel, args: &InvestorsArgs) -> Vec<InvestorRow<'a>> {
    let needle = args
        .search
        .as_deref()
        .map(|search| search.trim().to_lowercase())
        .filter(|needle| !needle.is_empty());

    let mut rows: Vec<_> = model
        .investors
        .iter()
        .filter(|investor| in_project(investor, args.project.as_deref()))
        .map(|investor| InvestorRow::new(investor, model))
        .filter(|row| needle.as_deref().is_none_or(|needle| row.matches_search(needle)))
        .collect();
    rows.sort_by_cached_key(|row| row.name.to_lowercase());
    rows
}

/// Handle `ventore investors`.
pub async fn handle_list(
    args: &InvestorsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let model = ctx.build_model().await?;
    let mut rows = investor_rows(&model, args);
    apply_limit(&mut rows, flags.limit);
    output(&rows, flags.format)
}

/// Handle `ventore investor <ID>`.
pub async fn handle_get(
    args: &InvestorArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let model = ctx.build_model().await?;
    let Some(profile) = investor_profile(&model, args.id.trim()) else {
        bail!("investor '{}' not found", args.id);
    };
    output(&profile, flags.format)
}
