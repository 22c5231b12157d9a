//! CLI response types returned as JSON by `sampah` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{BankSampahLocation, BioporiRecord};
use crate::enums::BioporiStatus;
use crate::errors::CoreError;
use crate::wire;

/// A biopori record with its derived schedule and status, for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BioporiSummary {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub date: String,
    pub time: String,
    pub end_date: String,
    pub end_time: String,
    pub status: BioporiStatus,
    /// Lifecycle actions currently offered for this record.
    pub actions: Vec<String>,
}

impl TryFrom<&BioporiRecord> for BioporiSummary {
    type Error = CoreError;

    fn try_from(record: &BioporiRecord) -> Result<Self, Self::Error> {
        let schedule = record.schedule()?;
        let status = record.status();
        let mut actions: Vec<String> = status
            .allowed_next_states()
            .iter()
            .map(|next| match next {
                BioporiStatus::Full => "mark_full".to_string(),
                BioporiStatus::Harvested => "mark_harvested".to_string(),
                BioporiStatus::Active => next.to_string(),
            })
            .collect();
        if status == BioporiStatus::Active {
            actions.push("edit".to_string());
        }

        Ok(Self {
            id: record.id.clone(),
            name: record.name.clone(),
            image_url: record.image_url.clone(),
            date: wire::format_date(record.date),
            time: wire::format_time(record.time),
            end_date: wire::format_date(schedule.end_date),
            end_time: wire::format_time(schedule.end_time),
            status,
            actions,
        })
    }
}

/// Response from `sampah home`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HomeResponse {
    pub greeting: String,
    pub user: Option<String>,
    pub biopori_count: Option<usize>,
    pub nearby: Vec<BankSampahLocation>,
}

/// Response from `sampah bank sell`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SaleResponse {
    pub message: String,
    pub whatsapp_url: String,
    pub opened: bool,
}
