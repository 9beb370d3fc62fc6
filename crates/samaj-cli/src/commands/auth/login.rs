use std::io::BufRead;

use anyhow::Context;
use samaj_core::enums::Role;
use samaj_core::identity::AuthIdentity;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    name: String,
    role: Role,
    chokhla_id: Option<String>,
    village_id: Option<String>,
    token_source: Option<String>,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let password = resolve_password(args)?;
    let login = ctx.api.login(&args.mobile, &password).await?;

    ctx.store.store(&login.token)?;
    let identity = AuthIdentity::from(&login.user);
    ctx.store.store_identity(&identity)?;
    tracing::info!(user_id = %identity.user_id, role = %identity.role, "signed in");

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: identity.user_id,
            name: login.user.name,
            role: identity.role,
            chokhla_id: identity.chokhla_id,
            village_id: identity.village_id,
            token_source: ctx.store.detect_token_source(),
        },
        flags.format,
    )
}

fn resolve_password(args: &AuthLoginArgs) -> anyhow::Result<String> {
    if let Some(password) = &args.password {
        return Ok(password.clone());
    }
    if !args.password_stdin {
        anyhow::bail!("auth login: pass --password-stdin (or --password)");
    }
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(trim_line_ending(&line).to_string())
}

fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::trim_line_ending;

    #[test]
    fn only_the_line_ending_is_stripped() {
        assert_eq!(trim_line_ending("pa ss \r\n"), "pa ss ");
        assert_eq!(trim_line_ending("secret"), "secret");
    }
}
