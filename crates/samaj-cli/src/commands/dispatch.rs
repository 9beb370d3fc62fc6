use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::Chokhla { action } => commands::chokhla::handle(&action, ctx, flags).await,
        Commands::Village { action } => commands::village::handle(&action, ctx, flags).await,
        Commands::Family { action } => commands::family::handle(&action, ctx, flags).await,
        Commands::Member { action } => commands::member::handle(&action, ctx, flags).await,
        Commands::Request { action } => commands::request::handle(&action, ctx, flags).await,
        Commands::Chanda { action } => commands::chanda::handle(&action, ctx, flags).await,
        Commands::Poll { action } => commands::poll::handle(&action, ctx, flags).await,
        Commands::Analytics { action } => commands::analytics::handle(&action, ctx, flags).await,
        Commands::Validate(args) => commands::validate::handle(&args, flags),
    }
}
