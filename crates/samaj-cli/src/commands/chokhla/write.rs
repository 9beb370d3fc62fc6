use samaj_core::entities::Chokhla;

use crate::cli::GlobalFlags;
use crate::commands::shared::payload::read_json;
use crate::context::AppContext;
use crate::output::output;

pub async fn create(file: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let chokhla: Chokhla = read_json(file)?;
    let created = ctx.api.create_chokhla(&chokhla).await?;
    tracing::info!(id = %created.id, name = %created.name, "chokhla created");
    output(&created, flags.format)
}

pub async fn update(id: &str, file: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let chokhla: Chokhla = read_json(file)?;
    let updated = ctx.api.update_chokhla(id, &chokhla).await?;
    output(&updated, flags.format)
}
