use anyhow::Context;
use clap::Parser;
use samaj_api::ApiError;
use samaj_auth::Area;

use crate::cli::Commands;
use crate::cli::subcommands::{
    AnalyticsCommands, AuthCommands, ChandaCommands, ChokhlaCommands, FamilyCommands,
    MemberCommands, PollCommands, RequestCommands, VillageCommands,
};

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("samaj error: {error:#}");
        if is_unauthorized(&error) {
            eprintln!("hint: the session was refused; run `samaj auth login --mobile <number>` again");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(cli.base_url.as_deref())?;
    let default_format = cli::OutputFormat::from_config(&config.general.default_format);
    let flags = cli.global_flags(default_format);
    output::style::init(&flags);

    if let Commands::Validate(args) = &cli.command {
        return commands::validate::handle(args, &flags);
    }

    context::warn_unconfigured(&config);

    let command = cli.command;
    let ctx = context::AppContext::init(config).context("failed to initialize samaj application context")?;

    if let Some((area, write)) = required_access(&command) {
        ctx.require(area, write)?;
    }

    commands::dispatch::dispatch(command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SAMAJ_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn is_unauthorized(error: &anyhow::Error) -> bool {
    error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<ApiError>())
        .any(ApiError::is_unauthorized)
}

/// Area and write flag a command needs from the signed-in role.
///
/// `None` means the command runs without a session (sign-in and session
/// inspection). The backend enforces the same rules; this only fails early.
fn required_access(command: &Commands) -> Option<(Area, bool)> {
    let gate = match command {
        Commands::Auth { action } => match action {
            AuthCommands::Login(_) | AuthCommands::Logout | AuthCommands::Status => return None,
            AuthCommands::Me => (Area::Profile, false),
            AuthCommands::Profile { .. } | AuthCommands::ChangePassword { .. } => (Area::Profile, true),
        },
        Commands::Validate(_) => return None,
        Commands::Dashboard(_) => (Area::Dashboard, false),
        Commands::Chokhla { action } => (
            Area::Chokhlas,
            !matches!(
                action,
                ChokhlaCommands::List { .. } | ChokhlaCommands::Get { .. } | ChokhlaCommands::Villages { .. }
            ),
        ),
        Commands::Village { action } => (
            Area::Villages,
            !matches!(
                action,
                VillageCommands::List { .. } | VillageCommands::Get { .. } | VillageCommands::Families { .. }
            ),
        ),
        Commands::Family { action } => (
            Area::Families,
            !matches!(action, FamilyCommands::List { .. } | FamilyCommands::Get { .. }),
        ),
        Commands::Member { action } => (Area::Families, !matches!(action, MemberCommands::List { .. })),
        Commands::Request { action } => (
            Area::Requests,
            matches!(action, RequestCommands::Approve { .. } | RequestCommands::Reject { .. }),
        ),
        Commands::Chanda { action } => (Area::Chanda, matches!(action, ChandaCommands::Record { .. })),
        Commands::Poll { action } => (
            Area::Polls,
            !matches!(action, PollCommands::List { .. } | PollCommands::Get { .. }),
        ),
        Commands::Analytics { action } => match action {
            AnalyticsCommands::Members { .. } => (Area::Families, false),
            AnalyticsCommands::Chanda { .. } => (Area::Chanda, false),
        },
    };
    Some(gate)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    fn gate(args: &[&str]) -> Option<(Area, bool)> {
        let cli = cli::Cli::try_parse_from(args).expect("args should parse");
        required_access(&cli.command)
    }

    #[test]
    fn session_commands_need_no_identity() {
        assert_eq!(gate(&["samaj", "auth", "login", "--mobile", "9876543210"]), None);
        assert_eq!(gate(&["samaj", "auth", "status"]), None);
        assert_eq!(gate(&["samaj", "validate", "family", "family.json"]), None);
    }

    #[test]
    fn reads_and_writes_are_told_apart() {
        assert_eq!(gate(&["samaj", "family", "list"]), Some((Area::Families, false)));
        assert_eq!(
            gate(&["samaj", "family", "create", "--file", "f.json"]),
            Some((Area::Families, true))
        );
        assert_eq!(gate(&["samaj", "chokhla", "villages", "chk-1"]), Some((Area::Chokhlas, false)));
        assert_eq!(gate(&["samaj", "request", "approve", "req-1"]), Some((Area::Requests, true)));
        assert_eq!(gate(&["samaj", "poll", "open", "poll-1"]), Some((Area::Polls, true)));
    }

    #[test]
    fn analytics_follow_the_underlying_area() {
        assert_eq!(
            gate(&["samaj", "analytics", "members", "--village", "vil-1"]),
            Some((Area::Families, false))
        );
        assert_eq!(gate(&["samaj", "analytics", "chanda"]), Some((Area::Chanda, false)));
    }

    #[test]
    fn unauthorized_api_error_is_found_in_chain() {
        let error = anyhow::Error::new(ApiError::Api {
            status: 401,
            message: "Token expired".into(),
        })
        .context("failed to load profile");
        assert!(is_unauthorized(&error));
        assert!(!is_unauthorized(&anyhow::anyhow!("other")));
    }
}
