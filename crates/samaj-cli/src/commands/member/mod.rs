use samaj_core::entities::Person;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MemberCommands;
use crate::commands::shared::deleted::DeletedResponse;
use crate::commands::shared::payload::read_json;
use crate::context::AppContext;
use crate::output::output;

/// Handle `samaj member`.
pub async fn handle(action: &MemberCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        MemberCommands::List { family } => output(&ctx.api.list_members(family).await?, flags.format),
        MemberCommands::Add { family, file } => {
            let member: Person = read_json(file)?;
            let added = ctx.api.add_member(family, &member).await?;
            tracing::info!(family_id = %family, member_id = %added.id, "member added");
            output(&added, flags.format)
        }
        MemberCommands::Update {
            family,
            member,
            file,
        } => {
            let person: Person = read_json(file)?;
            output(&ctx.api.update_member(family, member, &person).await?, flags.format)
        }
        MemberCommands::Remove { family, member } => {
            ctx.api.delete_member(family, member).await?;
            output(&DeletedResponse::new("member", member), flags.format)
        }
    }
}
