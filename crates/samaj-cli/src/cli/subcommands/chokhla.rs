use clap::Subcommand;

/// Chokhla commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChokhlaCommands {
    /// List chokhlas.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Get a chokhla by ID.
    Get { id: String },
    /// Create a chokhla from a JSON file.
    Create {
        #[arg(long)]
        file: String,
    },
    /// Replace a chokhla from a JSON file.
    Update {
        id: String,
        #[arg(long)]
        file: String,
    },
    /// Delete a chokhla.
    Delete { id: String },
    /// List the villages of a chokhla.
    Villages { id: String },
}
