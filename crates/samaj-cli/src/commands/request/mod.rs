use samaj_core::enums::RequestStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RequestCommands;
use crate::commands::shared::limit::page_query;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `samaj request`.
pub async fn handle(action: &RequestCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RequestCommands::List {
            status,
            village,
            page,
        } => {
            let status = status
                .as_deref()
                .map(|raw| parse_enum::<RequestStatus>(raw, "status"))
                .transpose()?;
            let query = page_query(*page, None, flags, ctx.config.general.default_limit)
                .filter_opt("status", status.map(RequestStatus::as_str))
                .filter_opt("villageId", village.as_deref());
            output(&ctx.api.list_requests(&query).await?, flags.format)
        }
        RequestCommands::Get { id } => output(&ctx.api.get_request(id).await?, flags.format),
        RequestCommands::Approve { id, remarks } => {
            let reviewed = ctx.api.approve_request(id, remarks.as_deref()).await?;
            tracing::info!(%id, "request approved");
            output(&reviewed, flags.format)
        }
        RequestCommands::Reject { id, remarks } => {
            let reviewed = ctx.api.reject_request(id, remarks.as_deref()).await?;
            tracing::info!(%id, "request rejected");
            output(&reviewed, flags.format)
        }
    }
}
