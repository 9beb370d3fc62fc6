use clap::Subcommand;

/// Family commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FamilyCommands {
    /// List families (scoped to the signed-in chokhla or village by default).
    List {
        #[arg(long)]
        village: Option<String>,
        #[arg(long)]
        chokhla: Option<String>,
        /// Verification status: draft, pending, verified.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Get a family with its members.
    Get { id: String },
    /// Register a family (with members) from a JSON file.
    Create {
        #[arg(long)]
        file: String,
    },
    /// Replace a family (with members) from a JSON file.
    Update {
        id: String,
        #[arg(long)]
        file: String,
    },
    /// Delete a family.
    Delete { id: String },
}
