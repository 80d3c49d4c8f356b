use ventore_model::Overview;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ventore overview`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let model = ctx.build_model().await?;
    output(&Overview::from_model(&model), flags.format)
}
