use samaj_core::entities::PasswordChange;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::payload::read_json;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct PasswordChangeResponse {
    changed: bool,
}

pub async fn handle(file: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let change: PasswordChange = read_json(file)?;
    ctx.api.change_password(&change).await?;
    output(&PasswordChangeResponse { changed: true }, flags.format)
}
