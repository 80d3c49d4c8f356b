use anyhow::Context;
use ventore_sheets::Row;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RawArgs;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

/// Keep rows where any cell contains `search`, ignoring case. A blank
/// search keeps everything.
pub fn filter_rows(rows: Vec<Row>, search: Option<&str>) -> Vec<Row> {
    let needle = search.map(str::trim).unwrap_or_default().to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| row.iter().any(|(_, value)| value.to_lowercase().contains(&needle)))
        .collect()
}

/// Handle `ventore raw <SOURCE>`: rows exactly as parsed, before
/// reconciliation.
pub async fn handle(args: &RawArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = ctx.config.sources.get(args.source);
    let fetched = ctx
        .client
        .fetch_sheet(source)
        .await
        .with_context(|| format!("failed to load {} sheet", args.source))?;

    tracing::debug!(
        sheet = %fetched.name,
        fetched_at = %fetched.fetched_at,
        from_cache = fetched.from_cache,
        headers = fetched.sheet.headers.len(),
        warnings = fetched.sheet.warnings.len(),
        "raw sheet loaded"
    );

    let mut rows = filter_rows(fetched.sheet.rows, args.search.as_deref());
    apply_limit(&mut rows, flags.limit);
    output(&rows, flags.format)
}
