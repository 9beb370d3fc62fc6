use clap::Subcommand;

/// Commands for the members of one family.
#[derive(Clone, Debug, Subcommand)]
pub enum MemberCommands {
    /// List the members of a family.
    List { family: String },
    /// Add a member from a JSON file.
    Add {
        family: String,
        #[arg(long)]
        file: String,
    },
    /// Replace a member from a JSON file.
    Update {
        family: String,
        member: String,
        #[arg(long)]
        file: String,
    },
    /// Remove a member.
    Remove { family: String, member: String },
}
