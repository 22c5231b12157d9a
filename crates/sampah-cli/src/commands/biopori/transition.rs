use anyhow::Context;
use sampah_biopori::Directory;
use sampah_client::ApiClient;

use super::summarize;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn mark_full(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let directory = loaded(ctx).await?;
    let record = Progress::wrap("Marking full", directory.mark_full(id))
        .await
        .with_context(|| format!("cannot mark biopori {id} as full"))?;
    output(&summarize(&record)?, flags.format)
}

pub async fn mark_harvested(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let directory = loaded(ctx).await?;
    let record = Progress::wrap("Marking harvested", directory.mark_harvested(id))
        .await
        .with_context(|| format!("cannot mark biopori {id} as harvested"))?;
    output(&summarize(&record)?, flags.format)
}

/// Transitions act on the current listing, so fetch it first.
async fn loaded(ctx: &AppContext) -> anyhow::Result<Directory<ApiClient>> {
    let directory = ctx.directory();
    Progress::wrap("Fetching biopori", directory.list()).await?;
    Ok(directory)
}
