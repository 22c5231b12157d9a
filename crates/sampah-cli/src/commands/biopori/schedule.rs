use chrono::NaiveTime;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_time};
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ScheduleResponse {
    date: String,
    time: String,
    end_date: String,
    end_time: String,
    active_days: u64,
}

pub fn run(date: &str, time: Option<&str>, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&preview(date, time)?, flags.format)
}

fn preview(date: &str, time: Option<&str>) -> anyhow::Result<ScheduleResponse> {
    let date = parse_date(date)?;
    let time = time.map(parse_time).transpose()?.unwrap_or(NaiveTime::MIN);
    let schedule = sampah_core::schedule::end_schedule(date, time)?;
    Ok(ScheduleResponse {
        date: sampah_core::wire::format_date(date),
        time: sampah_core::wire::format_time(time),
        end_date: sampah_core::wire::format_date(schedule.end_date),
        end_time: sampah_core::wire::format_time(schedule.end_time),
        active_days: sampah_core::schedule::ACTIVE_PERIOD_DAYS,
    })
}
