mod list;
mod write;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChokhlaCommands;
use crate::commands::shared::deleted::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `samaj chokhla`.
pub async fn handle(action: &ChokhlaCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ChokhlaCommands::List { search, page } => list::run(search.as_deref(), *page, ctx, flags).await,
        ChokhlaCommands::Get { id } => output(&ctx.api.get_chokhla(id).await?, flags.format),
        ChokhlaCommands::Create { file } => write::create(file, ctx, flags).await,
        ChokhlaCommands::Update { id, file } => write::update(id, file, ctx, flags).await,
        ChokhlaCommands::Delete { id } => {
            ctx.api.delete_chokhla(id).await?;
            output(&DeletedResponse::new("chokhla", id), flags.format)
        }
        ChokhlaCommands::Villages { id } => output(&ctx.api.chokhla_villages(id).await?, flags.format),
    }
}
