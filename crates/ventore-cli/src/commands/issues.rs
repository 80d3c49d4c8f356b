use ventore_core::entities::DataQualityIssue;
use ventore_core::enums::{IssueKind, Severity};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IssuesArgs;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn filter_issues(
    issues: Vec<DataQualityIssue>,
    severity: Option<Severity>,
    kind: Option<IssueKind>,
) -> Vec<DataQualityIssue> {
    issues
        .into_iter()
        .filter(|issue| severity.is_none_or(|severity| issue.severity == severity))
        .filter(|issue| kind.is_none_or(|kind| issue.kind == kind))
        .collect()
}

/// Handle `ventore issues`.
pub async fn handle(args: &IssuesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let severity = args
        .severity
        .as_deref()
        .map(|raw| parse_enum::<Severity>(raw, "severity"))
        .transpose()?;
    let kind = args
        .kind
        .as_deref()
        .map(|raw| parse_enum::<IssueKind>(raw, "kind"))
        .transpose()?;

    let model = ctx.build_model().await?;
    let mut issues = filter_issues(model.issues, severity, kind);
    apply_limit(&mut issues, flags.limit);
    output(&issues, flags.format)
}
