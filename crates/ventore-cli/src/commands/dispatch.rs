use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Model => commands::model::handle(ctx, flags).await,
        Commands::Overview => commands::overview::handle(ctx, flags).await,
        Commands::Investors(args) => commands::investors::handle_list(&args, ctx, flags).await,
        Commands::Investor(args) => commands::investors::handle_get(&args, ctx, flags).await,
        Commands::Projects(args) => commands::projects::handle(&args, ctx, flags).await,
        Commands::Issues(args) => commands::issues::handle(&args, ctx, flags).await,
        Commands::Pipeline(args) => commands::pipeline::handle(&args, ctx, flags).await,
        Commands::Activity(args) => commands::activity::handle(&args, ctx, flags).await,
        Commands::Raw(args) => commands::raw::handle(&args, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
