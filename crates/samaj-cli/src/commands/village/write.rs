use samaj_core::entities::Village;

use crate::cli::GlobalFlags;
use crate::commands::shared::payload::read_json;
use crate::context::AppContext;
use crate::output::output;

pub async fn create(file: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut village: Village = read_json(file)?;
    if village.chokhla_id.trim().is_empty()
        && let Some(chokhla_id) = ctx.identity.as_ref().and_then(|i| i.chokhla_id.clone())
    {
        village.chokhla_id = chokhla_id;
    }
    let created = ctx.api.create_village(&village).await?;
    tracing::info!(id = %created.id, name = %created.name, "village created");
    output(&created, flags.format)
}

pub async fn update(id: &str, file: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let village: Village = read_json(file)?;
    let updated = ctx.api.update_village(id, &village).await?;
    output(&updated, flags.format)
}
