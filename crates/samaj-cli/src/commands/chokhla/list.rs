use crate::cli::GlobalFlags;
use crate::commands::shared::limit::page_query;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    search: Option<&str>,
    page: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = page_query(page, search, flags, ctx.config.general.default_limit);
    let chokhlas = ctx.api.list_chokhlas(&query).await?;
    output(&chokhlas, flags.format)
}
