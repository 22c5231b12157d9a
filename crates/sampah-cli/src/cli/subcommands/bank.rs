use clap::{Args, Subcommand};

/// Bank sampah commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BankCommands {
    /// List bank sampah locations.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one location.
    Get { id: String },
    /// Prepare a WhatsApp message to sell waste.
    Sell(BankSellArgs),
}

#[derive(Clone, Debug, Args)]
pub struct BankSellArgs {
    /// Pickup address.
    #[arg(long)]
    pub address: String,
    /// Weight in kilograms.
    #[arg(long)]
    pub weight: f64,
    /// plastik, botol, or kertas.
    #[arg(long)]
    pub kind: String,
    /// Open the WhatsApp link in the browser.
    #[arg(long)]
    pub open: bool,
}
