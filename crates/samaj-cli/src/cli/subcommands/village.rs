use clap::Subcommand;

/// Village commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VillageCommands {
    /// List villages (chokhla admins default to their own chokhla).
    List {
        #[arg(long)]
        chokhla: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Get a village by ID.
    Get { id: String },
    /// Create a village from a JSON file.
    Create {
        #[arg(long)]
        file: String,
    },
    /// Replace a village from a JSON file.
    Update {
        id: String,
        #[arg(long)]
        file: String,
    },
    /// Delete a village.
    Delete { id: String },
    /// List the families of a village.
    Families { id: String },
}
