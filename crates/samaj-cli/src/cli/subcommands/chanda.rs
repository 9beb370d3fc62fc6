use clap::Subcommand;

/// Chanda collection commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChandaCommands {
    /// Per-village collection totals.
    List {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Collection totals for one village.
    Village { id: String },
    /// Record a payment from a JSON file.
    Record {
        #[arg(long)]
        file: String,
    },
}
