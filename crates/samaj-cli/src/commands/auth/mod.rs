mod login;
mod logout;
mod password;
mod profile;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `samaj auth <subcommand>`.
pub async fn handle(action: &AuthCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
        AuthCommands::Me => output(&ctx.api.me().await?, flags.format),
        AuthCommands::Profile { file } => profile::handle(file, ctx, flags).await,
        AuthCommands::ChangePassword { file } => password::handle(file, ctx, flags).await,
    }
}
