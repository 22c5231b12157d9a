use chrono::{Local, Timelike};
use sampah_core::catalog;
use sampah_core::greeting::greeting;
use sampah_core::responses::HomeResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `sampah home`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = ctx.session.status();
    let biopori_count = if status.authenticated {
        let directory = ctx.directory();
        match Progress::wrap("Fetching biopori", directory.list()).await {
            Ok(records) => Some(records.len()),
            Err(error) => {
                tracing::warn!(%error, "biopori count unavailable");
                None
            }
        }
    } else {
        None
    };

    let mut nearby = catalog::locations();
    nearby.truncate(ctx.config.bank_sampah.nearby);

    output(
        &HomeResponse {
            greeting: greeting(Local::now().hour()).to_string(),
            user: status.user,
            biopori_count,
            nearby,
        },
        flags.format,
    )
}
