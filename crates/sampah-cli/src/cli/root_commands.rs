use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, BankCommands, BioporiCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Greeting, biopori count, and nearby bank sampah.
    Home,
    /// Login, registration, and stored credentials.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Biopori holes and their lifecycle.
    Biopori {
        #[command(subcommand)]
        action: BioporiCommands,
    },
    /// Bank sampah locations and selling waste.
    Bank {
        #[command(subcommand)]
        action: BankCommands,
    },
    /// Education feed.
    Edukasi,
    /// Account summary.
    Profile,
}
