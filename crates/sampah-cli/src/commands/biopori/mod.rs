mod create;
mod get;
mod list;
mod schedule;
mod transition;
mod update;

use sampah_core::entities::BioporiRecord;
use sampah_core::responses::BioporiSummary;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BioporiCommands;
use crate::context::AppContext;

/// Handle `sampah biopori <subcommand>`.
pub async fn handle(
    action: &BioporiCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BioporiCommands::List {
            search,
            status,
            limit,
        } => list::run(search.as_deref(), status.as_deref(), *limit, ctx, flags).await,
        BioporiCommands::Get { id } => get::run(id, ctx, flags).await,
        BioporiCommands::Create(args) => create::run(args, ctx, flags).await,
        BioporiCommands::Update(args) => update::run(args, ctx, flags).await,
        BioporiCommands::Full { id } => transition::mark_full(id, ctx, flags).await,
        BioporiCommands::Harvest { id } => transition::mark_harvested(id, ctx, flags).await,
        BioporiCommands::Schedule { date, time } => schedule::run(date, time.as_deref(), flags),
    }
}

fn summarize(record: &BioporiRecord) -> anyhow::Result<BioporiSummary> {
    Ok(BioporiSummary::try_from(record)?)
}
