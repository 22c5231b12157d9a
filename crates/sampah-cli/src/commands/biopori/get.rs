use sampah_client::BioporiApi;

use super::summarize;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let credential = ctx.session.require()?;
    let record = Progress::wrap("Fetching biopori", ctx.client.get_biopori(&credential, id)).await?;
    output(&summarize(&record)?, flags.format)
}
