use sampah_core::entities::BioporiRecord;
use sampah_core::enums::BioporiStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct ProfileResponse {
    authenticated: bool,
    user: Option<String>,
    token_source: Option<String>,
    expires_at: Option<String>,
    #[serde(flatten)]
    biopori: Option<BioporiCounts>,
}

/// Per-status tally; the three buckets always sum to `biopori_total`.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
struct BioporiCounts {
    biopori_total: usize,
    biopori_active: usize,
    biopori_full: usize,
    biopori_harvested: usize,
}

impl BioporiCounts {
    fn tally(records: &[BioporiRecord]) -> Self {
        records.iter().fold(
            Self {
                biopori_total: records.len(),
                ..Self::default()
            },
            |mut counts, record| {
                match record.status() {
                    BioporiStatus::Active => counts.biopori_active += 1,
                    BioporiStatus::Full => counts.biopori_full += 1,
                    BioporiStatus::Harvested => counts.biopori_harvested += 1,
                }
                counts
            },
        )
    }
}

/// Handle `sampah profile`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = ctx.session.status();

    let biopori = if status.authenticated {
        let directory = ctx.directory();
        let records = Progress::wrap("Fetching biopori", directory.list()).await?;
        Some(BioporiCounts::tally(&records))
    } else {
        None
    };

    output(
        &ProfileResponse {
            authenticated: status.authenticated,
            user: status.user,
            token_source: status.source.map(|s| s.to_string()),
            expires_at: status.expires_at.map(|at| at.to_rfc3339()),
            biopori,
        },
        flags.format,
    )
}
