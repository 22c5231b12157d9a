use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Home => commands::home::handle(ctx, flags).await,
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Biopori { action } => commands::biopori::handle(&action, ctx, flags).await,
        Commands::Bank { action } => commands::bank::handle(&action, ctx, flags),
        Commands::Edukasi => commands::edukasi::handle(ctx, flags),
        Commands::Profile => commands::profile::handle(ctx, flags).await,
    }
}
