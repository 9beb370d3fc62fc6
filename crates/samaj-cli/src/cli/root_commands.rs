use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{
    AnalyticsCommands, AuthCommands, ChandaCommands, ChokhlaCommands, FamilyCommands,
    MemberCommands, PollCommands, RequestCommands, VillageCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out and manage the signed-in account.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Dashboard counters (society-wide, per chokhla, or per village).
    Dashboard(DashboardArgs),
    /// Chokhlas (regional councils).
    Chokhla {
        #[command(subcommand)]
        action: ChokhlaCommands,
    },
    /// Villages.
    Village {
        #[command(subcommand)]
        action: VillageCommands,
    },
    /// Families.
    Family {
        #[command(subcommand)]
        action: FamilyCommands,
    },
    /// Members of one family.
    Member {
        #[command(subcommand)]
        action: MemberCommands,
    },
    /// Family change requests awaiting review.
    Request {
        #[command(subcommand)]
        action: RequestCommands,
    },
    /// Chanda collection.
    Chanda {
        #[command(subcommand)]
        action: ChandaCommands,
    },
    /// Community polls.
    Poll {
        #[command(subcommand)]
        action: PollCommands,
    },
    /// Check a JSON form file offline, without contacting the backend.
    Validate(ValidateArgs),
    /// Demographic and collection summaries.
    Analytics {
        #[command(subcommand)]
        action: AnalyticsCommands,
    },
}

/// Arguments for `samaj dashboard`.
///
/// Without a scope flag the dashboard matching the signed-in role is shown.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    #[arg(long, conflicts_with = "village")]
    pub chokhla: Option<String>,
    #[arg(long)]
    pub village: Option<String>,
}

/// Form kinds accepted by `samaj validate`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormKind {
    Family,
    Member,
    Village,
    Chokhla,
    Poll,
    Chanda,
    Profile,
}

/// Arguments for `samaj validate`.
#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    pub kind: FormKind,
    /// JSON file to check (`-` for stdin).
    pub file: String,
    /// For `member`: JSON file with the family's current members.
    #[arg(long)]
    pub household: Option<String>,
}
