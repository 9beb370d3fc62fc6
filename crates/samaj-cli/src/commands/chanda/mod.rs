use samaj_core::entities::ChandaEntry;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChandaCommands;
use crate::commands::shared::payload::read_json;
use crate::context::AppContext;
use crate::output::output;

/// Handle `samaj chanda`.
pub async fn handle(action: &ChandaCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ChandaCommands::List { year } => output(&ctx.api.chanda_records(*year).await?, flags.format),
        ChandaCommands::Village { id } => output(&ctx.api.village_chanda(id).await?, flags.format),
        ChandaCommands::Record { file } => {
            let entry: ChandaEntry = read_json(file)?;
            output(&ctx.api.record_chanda(&entry).await?, flags.format)
        }
    }
}
