use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with mobile number and password.
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current auth status.
    Status,
    /// Fetch the signed-in account from the backend.
    Me,
    /// Update name, mobile and email from a JSON file.
    Profile {
        #[arg(long)]
        file: String,
    },
    /// Change the password; the JSON file holds `currentPassword` and `newPassword`.
    ChangePassword {
        #[arg(long)]
        file: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Registered 10-digit mobile number.
    #[arg(long)]
    pub mobile: String,
    /// Read the password from the first line of stdin.
    #[arg(long)]
    pub password_stdin: bool,
    /// Password (prefer --password-stdin; this ends up in shell history).
    #[arg(long, conflicts_with = "password_stdin")]
    pub password: Option<String>,
}
