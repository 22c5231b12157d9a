use sampah_core::entities::BioporiRecord;
use sampah_core::enums::BioporiStatus;

use super::summarize;
use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(
    search: Option<&str>,
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|raw| parse_enum::<BioporiStatus>(raw, "status"))
        .transpose()?;
    let limit = ctx.limit(limit, flags.limit);

    let directory = ctx.directory();
    Progress::wrap("Fetching biopori", directory.list()).await?;

    let records = filter_status(directory.search(search.unwrap_or_default()), status);
    let summaries = records
        .iter()
        .take(limit)
        .map(summarize)
        .collect::<anyhow::Result<Vec<_>>>()?;
    output(&summaries, flags.format)
}

fn filter_status(mut records: Vec<BioporiRecord>, status: Option<BioporiStatus>) -> Vec<BioporiRecord> {
    if let Some(status) = status {
        records.retain(|record| record.status() == status);
    }
    records
}
