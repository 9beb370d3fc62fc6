use clap::Subcommand;

/// Family request review commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RequestCommands {
    /// List requests.
    List {
        /// Request status: pending, approved, rejected.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        village: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Get a request by ID.
    Get { id: String },
    /// Approve a pending request.
    Approve {
        id: String,
        #[arg(long)]
        remarks: Option<String>,
    },
    /// Reject a pending request.
    Reject {
        id: String,
        #[arg(long)]
        remarks: Option<String>,
    },
}
