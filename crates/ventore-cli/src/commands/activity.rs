use ventore_model::{ActivityItem, activity_feed};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ActivityArgs;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn search_items(items: Vec<ActivityItem>, search: Option<&str>) -> Vec<ActivityItem> {
    let Some(needle) = search.map(|s| s.trim().to_lowercase()) else {
        return items;
    };
    items
        .into_iter()
        .filter(|item| {
            [&item.project, &item.investor, &item.text]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Handle `ventore activity`.
pub async fn handle(args: &ActivityArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let model = ctx.build_model().await?;
    let mut items = search_items(activity_feed(&model), args.search.as_deref());
    apply_limit(&mut items, flags.limit);
    output(&items, flags.format)
}
