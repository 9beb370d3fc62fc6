mod list;
mod write;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FamilyCommands;
use crate::commands::shared::deleted::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `samaj family`.
pub async fn handle(action: &FamilyCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FamilyCommands::List {
            village,
            chokhla,
            status,
            search,
            page,
        } => {
            let filter = list::ListFilter {
                village: village.as_deref(),
                chokhla: chokhla.as_deref(),
                status: status.as_deref(),
                search: search.as_deref(),
                page: *page,
            };
            list::run(&filter, ctx, flags).await
        }
        FamilyCommands::Get { id } => output(&ctx.api.get_family(id).await?, flags.format),
        FamilyCommands::Create { file } => write::create(file, ctx, flags).await,
        FamilyCommands::Update { id, file } => write::update(id, file, ctx, flags).await,
        FamilyCommands::Delete { id } => {
            ctx.api.delete_family(id).await?;
            output(&DeletedResponse::new("family", id), flags.format)
        }
    }
}
