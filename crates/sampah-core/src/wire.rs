//! Serde adapters for the backend's wire formats.
//!
//! Dates go out as `yyyy-MM-dd` and times as `HH:mm`. On the way in the
//! backend sometimes returns full timestamps (`2025-12-15T00:00:00.000Z`) or
//! times with seconds, so parsing accepts those too.

use chrono::{NaiveDate, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a wire date, tolerating a trailing timestamp suffix.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

/// Parse a wire time as `HH:mm`, `HH:mm:ss`, or `HH:mm:ss.fff`.
#[must_use]
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    [TIME_FORMAT, "%H:%M:%S", "%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// `#[serde(with = "wire::date")]`
pub mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
    }
}

/// `#[serde(with = "wire::time")]`
pub mod time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).ok_or_else(|| D::Error::custom(format!("invalid time '{raw}'")))
    }
}

/// Accept ids encoded either as JSON strings or numbers.
///
/// # Errors
///
/// Fails for any other JSON type.
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    use serde::de::Error as _;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamped_dates() {
        let expected = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
        assert_eq!(parse_date("2025-12-15"), Some(expected));
        assert_eq!(parse_date("2025-12-15T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_date("15/12/2025"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn parses_time_variants() {
        let expected = NaiveTime::from_hms_opt(7, 5, 0).unwrap();
        assert_eq!(parse_time("07:05"), Some(expected));
        assert_eq!(parse_time("07:05:00"), Some(expected));
        assert_eq!(parse_time("07:05:00.000"), Some(expected));
        assert_eq!(parse_time("7 am"), None);
    }

    #[test]
    fn formats_are_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        let time = NaiveTime::from_hms_opt(9, 4, 59).unwrap();
        assert_eq!(format_date(date), "2026-02-03");
        assert_eq!(format_time(time), "09:04");
    }
}
