mod list;
mod write;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VillageCommands;
use crate::commands::shared::deleted::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `samaj village`.
pub async fn handle(action: &VillageCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        VillageCommands::List {
            chokhla,
            search,
            page,
        } => list::run(chokhla.as_deref(), search.as_deref(), *page, ctx, flags).await,
        VillageCommands::Get { id } => output(&ctx.api.get_village(id).await?, flags.format),
        VillageCommands::Create { file } => write::create(file, ctx, flags).await,
        VillageCommands::Update { id, file } => write::update(id, file, ctx, flags).await,
        VillageCommands::Delete { id } => {
            ctx.api.delete_village(id).await?;
            output(&DeletedResponse::new("village", id), flags.format)
        }
        VillageCommands::Families { id } => output(&ctx.api.village_families(id).await?, flags.format),
    }
}
