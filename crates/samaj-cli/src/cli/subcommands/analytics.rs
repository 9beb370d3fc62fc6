use clap::Subcommand;

/// Summary commands computed from backend records.
#[derive(Clone, Debug, Subcommand)]
pub enum AnalyticsCommands {
    /// Demographics of one family or every family in a village.
    Members {
        #[arg(long, conflicts_with = "village", required_unless_present = "village")]
        family: Option<String>,
        #[arg(long)]
        village: Option<String>,
    },
    /// Chanda collection rate per village with a society-wide total.
    Chanda {
        #[arg(long)]
        year: Option<i32>,
    },
}
