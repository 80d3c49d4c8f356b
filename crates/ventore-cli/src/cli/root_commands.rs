use clap::{Args, Subcommand, ValueEnum};
use ventore_core::enums::SourceKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the full reconciled model.
    Model,
    /// Headline counts and distributions.
    Overview,
    /// List master-list investors.
    Investors(InvestorsArgs),
    /// One investor with their cap-table lines and compliance rows.
    Investor(InvestorArgs),
    /// Project/stage index.
    Projects(ProjectsArgs),
    /// Data-quality issues found while reconciling.
    Issues(IssuesArgs),
    /// Pipeline views over cap-table lines.
    Pipeline(PipelineArgs),
    /// Cap-table notes and compliance next steps.
    Activity(ActivityArgs),
    /// Rows of one source sheet as fetched.
    Raw(RawArgs),
    /// Print the JSON Schema of an output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct InvestorsArgs {
    /// Case-insensitive substring of any name or the projects text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only investors with a membership in this project
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct InvestorArgs {
    /// Investor id: the record id, or a `name:` key for investors without one
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectsArgs {
    /// One row per project and stage instead of per-project totals
    #[arg(long)]
    pub stages: bool,
}

#[derive(Clone, Debug, Args)]
pub struct IssuesArgs {
    /// Only issues of this severity (low, medium, high)
    #[arg(long)]
    pub severity: Option<String>,

    /// Only issues of this kind (e.g. duplicate-cap-table-id)
    #[arg(long)]
    pub kind: Option<String>,
}

/// Which pipeline view to print.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum PipelineView {
    /// Lines that look stalled before close.
    #[default]
    Stuck,
    /// Status distribution.
    Statuses,
    /// Investor memberships per project and stage.
    Stages,
}

#[derive(Clone, Debug, Args)]
pub struct PipelineArgs {
    #[arg(long, value_enum, default_value_t = PipelineView::Stuck)]
    pub view: PipelineView,
}

#[derive(Clone, Debug, Args)]
pub struct ActivityArgs {
    /// Case-insensitive substring of project, investor or text
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RawArgs {
    /// Source sheet: master, rune, aria, polarity, compliance
    pub source: SourceKind,

    /// Case-insensitive substring of any cell
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name: model, investor, cap-table-entry, compliance-row, issue, project
    pub type_name: String,
}
