use samaj_core::entities::ProfileUpdate;

use crate::cli::GlobalFlags;
use crate::commands::shared::payload::read_json;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(file: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile: ProfileUpdate = read_json(file)?;
    let user = ctx.api.update_profile(&profile).await?;
    output(&user, flags.format)
}
