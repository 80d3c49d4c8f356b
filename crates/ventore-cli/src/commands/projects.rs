use std::cmp::Reverse;
use std::collections::HashSet;

use serde::Serialize;
use ventore_core::entities::ProjectSummary;

use crate::cli::root_commands::ProjectsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Member counts of one stage.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StageCount<'a> {
    pub stage: &'a str,
    pub investors: usize,
    pub entries: usize,
}

/// One project with totals across its stages.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRow<'a> {
    pub project: String,
    /// Distinct investor keys over every stage.
    pub total_investors: usize,
    pub total_entries: usize,
    pub stages: Vec<StageCount<'a>>,
}

impl<'a> ProjectRow<'a> {
    fn new(summary: &'a ProjectSummary) -> Self {
        let investors: HashSet<&str> = summary
            .stages
            .iter()
            .flat_map(|stage| stage.investors.iter().map(String::as_str))
            .collect();
        Self {
            project: summary.project.to_uppercase(),
            total_investors: investors.len(),
            total_entries: summary.stages.iter().map(|stage| stage.entries.len()).sum(),
            stages: summary
                .stages
                .iter()
                .map(|stage| StageCount {
                    stage: &stage.stage,
                    investors: stage.investors.len(),
                    entries: stage.entries.len(),
                })
                .collect(),
        }
    }
}

/// Table form of [`ProjectRow`]: stages collapse to `stage investors/entries`.
#[derive(Debug, Serialize)]
struct ProjectTableRow {
    project: String,
    investors: usize,
    entries: usize,
    stages: String,
}

impl From<ProjectRow<'_>> for ProjectTableRow {
    fn from(row: ProjectRow<'_>) -> Self {
        let stages = row
            .stages
            .iter()
            .map(|count| format!("{} {}/{}", count.stage, count.investors, count.entries))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            project: row.project,
            investors: row.total_investors,
            entries: row.total_entries,
            stages,
        }
    }
}

/// Projects ordered by distinct investors, most first; ties keep index order.
pub fn project_rows(projects: &[ProjectSummary]) -> Vec<ProjectRow<'_>> {
    let mut rows: Vec<_> = projects.iter().map(ProjectRow::new).collect();
    rows.sort_by_key(|row| Reverse(row.total_investors));
    rows
}

/// One project/stage pair, flattened for table output.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StageRow<'a> {
    pub project: &'a str,
    pub stage: &'a str,
    pub investors: usize,
    pub entries: usize,
}

pub fn stage_rows(projects: &[ProjectSummary]) -> Vec<StageRow<'_>> {
    projects
        .iter()
        .flat_map(|project| {
            project.stages.iter().map(|stage| StageRow {
                project: &project.project,
                stage: &stage.stage,
                investors: stage.investors.len(),
                entries: stage.entries.len(),
            })
        })
        .collect()
}

/// Handle `ventore projects`. `--stages` switches to the index itself:
/// member ids in JSON, one row per stage in the table.
pub async fn handle(args: &ProjectsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let model = ctx.build_model().await?;
    match (args.stages, flags.format) {
        (true, OutputFormat::Table) => output(&stage_rows(&model.projects), flags.format),
        (true, _) => output(&model.projects, flags.format),
        (false, OutputFormat::Table) => {
            let rows: Vec<ProjectTableRow> = project_rows(&model.projects)
                .into_iter()
                .map(ProjectTableRow::from)
                .collect();
            output(&rows, flags.format)
        }
        (false, _) => output(&project_rows(&model.projects), flags.format),
    }
}
