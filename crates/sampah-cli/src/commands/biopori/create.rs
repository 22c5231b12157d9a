use chrono::{Local, Timelike};
use sampah_core::entities::{BioporiPayload, BioporiRecord};
use sampah_core::responses::BioporiSummary;
use sampah_core::wire;
use serde::Serialize;

use super::summarize;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::biopori::BioporiCreateArgs;
use crate::commands::shared::parse::{parse_date, parse_time};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
pub(super) struct BioporiSavedResponse {
    saved: Option<BioporiSummary>,
    end_date: String,
    end_time: String,
    total: Option<usize>,
}

pub async fn run(args: &BioporiCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = Local::now().naive_local();
    let date = args.date.as_deref().map(parse_date).transpose()?.unwrap_or(now.date());
    let time = match args.time.as_deref() {
        Some(raw) => parse_time(raw)?,
        None => now.time().with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(now.time()),
    };

    let mut form = ctx.new_form();
    form.set_name(args.name.as_str());
    form.set_image_url(args.image_url.clone());
    form.set_date(date);
    form.set_time(time);

    let saved = Progress::wrap("Saving biopori", form.submit()).await?;
    let response = saved_response(ctx, saved.as_ref(), &form.validate()?.payload()?).await?;
    output(&response, flags.format)
}

/// Refetch the listing after a save and report the derived schedule.
pub(super) async fn saved_response(
    ctx: &AppContext,
    saved: Option<&BioporiRecord>,
    payload: &BioporiPayload,
) -> anyhow::Result<BioporiSavedResponse> {
    let directory = ctx.directory();
    let total = match directory.refresh().await {
        Ok(_) => Some(directory.records().len()),
        Err(error) => {
            tracing::warn!(%error, "saved, but the listing could not be refreshed");
            None
        }
    };
    Ok(BioporiSavedResponse {
        saved: saved.map(summarize).transpose()?,
        end_date: wire::format_date(payload.end_date),
        end_time: wire::format_time(payload.end_time),
        total,
    })
}
