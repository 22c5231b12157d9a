use chrono::{NaiveDate, NaiveTime};
use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// `yyyy-MM-dd`.
pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    sampah_core::wire::parse_date(raw.trim())
        .ok_or_else(|| anyhow::anyhow!("invalid date '{raw}': expected yyyy-MM-dd"))
}

/// `HH:mm`.
pub fn parse_time(raw: &str) -> anyhow::Result<NaiveTime> {
    sampah_core::wire::parse_time(raw.trim())
        .ok_or_else(|| anyhow::anyhow!("invalid time '{raw}': expected HH:mm"))
}
