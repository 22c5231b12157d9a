use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::BioporiStatus;
use crate::errors::CoreError;
use crate::schedule::{Schedule, end_schedule};
use crate::wire;

/// A biopori hole as returned by the backend.
///
/// The end date/time the server echoes back is not kept: it is always
/// recomputed from `date` and `time` via [`BioporiRecord::schedule`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BioporiRecord {
    #[serde(alias = "_id", deserialize_with = "wire::id_string")]
    #[schemars(with = "String")]
    pub id: String,
    pub name: String,
    #[serde(alias = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(with = "wire::date")]
    #[schemars(with = "String")]
    pub date: NaiveDate,
    #[serde(with = "wire::time")]
    #[schemars(with = "String")]
    pub time: NaiveTime,
    #[serde(rename = "isFull", alias = "is_full", default)]
    pub is_full: bool,
    #[serde(rename = "isHarvested", alias = "is_harvested", default)]
    pub is_harvested: bool,
}

impl BioporiRecord {
    pub const ENTITY: &'static str = "biopori";

    #[must_use]
    pub const fn status(&self) -> BioporiStatus {
        BioporiStatus::from_flags(self.is_full, self.is_harvested)
    }

    /// Derived end of the active period.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the end date is out of range.
    pub fn schedule(&self) -> Result<Schedule, CoreError> {
        end_schedule(self.date, self.time)
    }

    /// Check that moving to `next` is a legal lifecycle step.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` otherwise.
    pub fn check_transition(&self, next: BioporiStatus) -> Result<(), CoreError> {
        let current = self.status();
        if current.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                entity_type: Self::ENTITY.to_string(),
                id: self.id.clone(),
                from: current.to_string(),
                to: next.to_string(),
            })
        }
    }

    /// Set the flags for a confirmed transition. Never clears a flag.
    pub fn apply_status(&mut self, next: BioporiStatus) {
        match next {
            BioporiStatus::Active => {}
            BioporiStatus::Full => self.is_full = true,
            BioporiStatus::Harvested => {
                self.is_full = true;
                self.is_harvested = true;
            }
        }
    }

    /// Case-insensitive substring match on the name.
    #[must_use]
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// Validated form values, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BioporiDraft {
    pub name: String,
    pub image_url: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl BioporiDraft {
    /// Validate raw form input.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the name is blank or the date or
    /// time is missing.
    pub fn new(
        name: &str,
        image_url: Option<&str>,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("name must not be empty".into()));
        }
        let date = date.ok_or_else(|| CoreError::Validation("date is required".into()))?;
        let time = time.ok_or_else(|| CoreError::Validation("time is required".into()))?;
        let image_url = image_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            name: name.to_string(),
            image_url,
            date,
            time,
        })
    }

    /// Build the request body, deriving the end date and time.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the end date is out of range.
    pub fn payload(&self) -> Result<BioporiPayload, CoreError> {
        let schedule = end_schedule(self.date, self.time)?;
        Ok(BioporiPayload {
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            date: self.date,
            time: self.time,
            end_date: schedule.end_date,
            end_time: schedule.end_time,
        })
    }
}

/// Body of `POST /api/biopori` and `PUT /api/biopori/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BioporiPayload {
    pub name: String,
    pub image_url: Option<String>,
    #[serde(with = "wire::date")]
    #[schemars(with = "String")]
    pub date: NaiveDate,
    #[serde(with = "wire::time")]
    #[schemars(with = "String")]
    pub time: NaiveTime,
    #[serde(rename = "endDate", with = "wire::date")]
    #[schemars(with = "String")]
    pub end_date: NaiveDate,
    #[serde(rename = "endTime", with = "wire::time")]
    #[schemars(with = "String")]
    pub end_time: NaiveTime,
}
