use samaj_api::ListQuery;
use samaj_core::entities::Poll;
use samaj_core::enums::PollStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PollCommands;
use crate::commands::shared::deleted::DeletedResponse;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::payload::read_json;
use crate::context::AppContext;
use crate::output::output;

/// Handle `samaj poll`.
pub async fn handle(action: &PollCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PollCommands::List { status } => {
            let status = status
                .as_deref()
                .map(|raw| parse_enum::<PollStatus>(raw, "status"))
                .transpose()?;
            let query = ListQuery::new().filter_opt("status", status.map(PollStatus::as_str));
            output(&ctx.api.list_polls(&query).await?, flags.format)
        }
        PollCommands::Get { id } => output(&ctx.api.get_poll(id).await?, flags.format),
        PollCommands::Create { file } => {
            let poll: Poll = read_json(file)?;
            let created = ctx.api.create_poll(&poll).await?;
            tracing::info!(id = %created.id, questions = created.questions.len(), "poll created");
            output(&created, flags.format)
        }
        PollCommands::Update { id, file } => {
            let poll: Poll = read_json(file)?;
            output(&ctx.api.update_poll(id, &poll).await?, flags.format)
        }
        PollCommands::Open { id } => transition(id, PollStatus::Active, ctx, flags).await,
        PollCommands::Close { id } => transition(id, PollStatus::Closed, ctx, flags).await,
        PollCommands::Delete { id } => {
            ctx.api.delete_poll(id).await?;
            output(&DeletedResponse::new("poll", id), flags.format)
        }
    }
}

async fn transition(id: &str, next: PollStatus, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let poll = ctx.api.set_poll_status(id, next).await?;
    tracing::info!(%id, status = %poll.status, "poll status changed");
    output(&poll, flags.format)
}
