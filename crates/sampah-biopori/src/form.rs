//! Create/edit form state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{NaiveDate, NaiveTime};
use sampah_auth::Session;
use sampah_client::BioporiApi;
use sampah_core::entities::{BioporiDraft, BioporiRecord};
use sampah_core::schedule::{Schedule, end_schedule};

use crate::error::BioporiError;
use crate::guard::InFlight;

/// Fixed when the form is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Raw, possibly incomplete, form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub image_url: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl From<&BioporiRecord> for FormValues {
    fn from(record: &BioporiRecord) -> Self {
        Self {
            name: record.name.clone(),
            image_url: record.image_url.clone(),
            date: Some(record.date),
            time: Some(record.time),
        }
    }
}

pub struct BioporiForm<A> {
    api: Arc<A>,
    session: Arc<Session>,
    mode: FormMode,
    values: FormValues,
    submitting: AtomicBool,
}

impl<A: BioporiApi> BioporiForm<A> {
    /// Empty form for a new record.
    #[must_use]
    pub fn create(api: Arc<A>, session: Arc<Session>) -> Self {
        Self {
            api,
            session,
            mode: FormMode::Create,
            values: FormValues::default(),
            submitting: AtomicBool::new(false),
        }
    }

    /// Form for an existing record, pre-populated from `GET /api/biopori/:id`.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a credential, or the backend failure.
    pub async fn edit(api: Arc<A>, session: Arc<Session>, id: &str) -> Result<Self, BioporiError> {
        let credential = session.require()?;
        let record = api.get_biopori(&credential, id).await?;
        Ok(Self {
            values: FormValues::from(&record),
            mode: FormMode::Edit { id: id.to_string() },
            api,
            session,
            submitting: AtomicBool::new(false),
        })
    }

    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.values.name = name.into();
    }

    /// Photo reference, passed through to the backend untouched.
    pub fn set_image_url(&mut self, image_url: Option<String>) {
        self.values.image_url = image_url;
    }

    pub const fn set_date(&mut self, date: NaiveDate) {
        self.values.date = Some(date);
    }

    pub const fn set_time(&mut self, time: NaiveTime) {
        self.values.time = Some(time);
    }

    /// Derived end of the active period, once date and time are chosen.
    #[must_use]
    pub fn end_schedule(&self) -> Option<Schedule> {
        let (date, time) = (self.values.date?, self.values.time?);
        end_schedule(date, time).ok()
    }

    /// # Errors
    ///
    /// `Validation` if the name is blank or the date or time is missing.
    pub fn validate(&self) -> Result<BioporiDraft, BioporiError> {
        Ok(BioporiDraft::new(
            &self.values.name,
            self.values.image_url.as_deref(),
            self.values.date,
            self.values.time,
        )?)
    }

    /// Validate and send. Values are kept whatever the outcome.
    ///
    /// Returns the record echoed by the backend, if any.
    ///
    /// # Errors
    ///
    /// `Busy` while another submit is in flight, `Validation` (nothing sent),
    /// `Unauthenticated`, or the backend failure.
    pub async fn submit(&self) -> Result<Option<BioporiRecord>, BioporiError> {
        let Some(_guard) = InFlight::acquire(&self.submitting) else {
            return Err(BioporiError::Busy("submit"));
        };
        let payload = self.validate()?.payload()?;
        let credential = self.session.require()?;

        let saved = match &self.mode {
            FormMode::Create => self.api.create_biopori(&credential, &payload).await?,
            FormMode::Edit { id } => self.api.update_biopori(&credential, id, &payload).await?,
        };
        tracing::debug!(mode = ?self.mode, name = %payload.name, "biopori saved");
        Ok(saved)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }
}
