mod list;
mod sell;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BankCommands;
use crate::context::AppContext;

/// Handle `sampah bank <subcommand>`.
pub fn handle(action: &BankCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        BankCommands::List { limit } => list::run(*limit, ctx, flags),
        BankCommands::Get { id } => list::get(id, flags),
        BankCommands::Sell(args) => sell::run(args, ctx, flags),
    }
}
