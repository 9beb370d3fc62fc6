use samaj_core::entities::Family;

use crate::cli::GlobalFlags;
use crate::commands::shared::payload::read_json;
use crate::context::AppContext;
use crate::output::output;

pub async fn create(file: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut family: Family = read_json(file)?;
    if family.village_id.trim().is_empty()
        && let Some(village_id) = ctx.identity.as_ref().and_then(|i| i.village_id.clone())
    {
        family.village_id = village_id;
    }
    let created = ctx.api.create_family(&family).await?;
    tracing::info!(
        id = %created.id,
        members = family.members.len(),
        "family registered"
    );
    output(&created, flags.format)
}

pub async fn update(id: &str, file: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let family: Family = read_json(file)?;
    let updated = ctx.api.update_family(id, &family).await?;
    output(&updated, flags.format)
}
