use clap::Subcommand;

/// Poll commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PollCommands {
    /// List polls.
    List {
        /// Poll status: draft, active, closed.
        #[arg(long)]
        status: Option<String>,
    },
    /// Get a poll by ID.
    Get { id: String },
    /// Create a poll from a JSON file.
    Create {
        #[arg(long)]
        file: String,
    },
    /// Replace a poll from a JSON file.
    Update {
        id: String,
        #[arg(long)]
        file: String,
    },
    /// Open a draft poll for voting.
    Open { id: String },
    /// Close an active poll.
    Close { id: String },
    /// Delete a poll.
    Delete { id: String },
}
