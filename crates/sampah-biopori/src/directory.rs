//! The user's biopori records and their lifecycle actions.
//!
//! The directory caches the last successful fetch. Search runs over that
//! cache and never touches the network. Transitions are validated locally,
//! sent to the backend, and patched into the cache only after the backend
//! confirms.

use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, RwLock};

use sampah_auth::Session;
use sampah_client::{BioporiApi, ClientError};
use sampah_core::entities::BioporiRecord;
use sampah_core::enums::BioporiStatus;
use sampah_core::{CoreError, Credential};
use tokio::sync::watch;

use crate::error::BioporiError;
use crate::guard::{InFlight, Pending};

/// Result of [`Directory::refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Fetched this many records.
    Completed(usize),
    /// Another refresh was already running.
    Skipped,
}

pub struct Directory<A> {
    api: Arc<A>,
    session: Arc<Session>,
    records: RwLock<Vec<BioporiRecord>>,
    session_rx: Mutex<watch::Receiver<Option<Credential>>>,
    refreshing: AtomicBool,
    pending: Mutex<HashSet<String>>,
}

impl<A: BioporiApi> Directory<A> {
    #[must_use]
    pub fn new(api: Arc<A>, session: Arc<Session>) -> Self {
        let session_rx = Mutex::new(session.subscribe());
        Self {
            api,
            session,
            records: RwLock::new(Vec::new()),
            session_rx,
            refreshing: AtomicBool::new(false),
            pending: Mutex::new(HashSet::new()),
        }
    }

    /// Fetch every record from the backend and replace the cache.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a credential (nothing is sent). Network and
    /// server failures leave the cache as it was.
    pub async fn list(&self) -> Result<Vec<BioporiRecord>, BioporiError> {
        self.observe_session();
        let credential = self.session.require()?;
        let fetched = self.api.list_biopori(&credential).await?;

        if self.session.credential().as_ref() != Some(&credential) {
            tracing::debug!("session changed during fetch; discarding result");
            return Err(ClientError::Unauthenticated.into());
        }
        warn_duplicate_ids(&fetched);
        *self.write() = fetched.clone();
        Ok(fetched)
    }

    /// Re-run [`Self::list`] unless a refresh is already in flight.
    ///
    /// # Errors
    ///
    /// As [`Self::list`].
    pub async fn refresh(&self) -> Result<Refresh, BioporiError> {
        let Some(_guard) = InFlight::acquire(&self.refreshing) else {
            tracing::debug!("refresh already in flight; skipping");
            return Ok(Refresh::Skipped);
        };
        let records = self.list().await?;
        Ok(Refresh::Completed(records.len()))
    }

    /// Called whenever the listing becomes visible again.
    ///
    /// # Errors
    ///
    /// As [`Self::list`].
    pub async fn focus(&self) -> Result<Refresh, BioporiError> {
        self.refresh().await
    }

    /// Case-insensitive substring search over cached names, in server order.
    /// An empty or all-whitespace query returns everything; otherwise the query
    /// is matched as typed, surrounding spaces included.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<BioporiRecord> {
        self.observe_session();
        let records = self.read();
        if query.trim().is_empty() {
            return records.clone();
        }
        let needle = query.to_lowercase();
        records
            .iter()
            .filter(|r| r.name_matches(&needle))
            .cloned()
            .collect()
    }

    /// Snapshot of the cache.
    #[must_use]
    pub fn records(&self) -> Vec<BioporiRecord> {
        self.search("")
    }

    /// Cached record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<BioporiRecord> {
        self.observe_session();
        self.read().iter().find(|r| r.id == id).cloned()
    }

    /// Mark an active record as full.
    ///
    /// # Errors
    ///
    /// `Unauthenticated`, `NotFound` for an uncached id, `InvalidTransition`
    /// if already full, `Busy` while a transition on the same id is in flight,
    /// or the backend failure. Nothing changes locally on error.
    pub async fn mark_full(&self, id: &str) -> Result<BioporiRecord, BioporiError> {
        self.transition(id, BioporiStatus::Full).await
    }

    /// Mark a full record as harvested.
    ///
    /// # Errors
    ///
    /// As [`Self::mark_full`]; `InvalidTransition` unless the record is full
    /// and not yet harvested.
    pub async fn mark_harvested(&self, id: &str) -> Result<BioporiRecord, BioporiError> {
        self.transition(id, BioporiStatus::Harvested).await
    }

    async fn transition(
        &self,
        id: &str,
        next: BioporiStatus,
    ) -> Result<BioporiRecord, BioporiError> {
        self.observe_session();
        let credential = self.session.require()?;
        let current = self.get(id).ok_or_else(|| CoreError::NotFound {
            entity_type: BioporiRecord::ENTITY.to_string(),
            id: id.to_string(),
        })?;
        current.check_transition(next)?;

        let Some(_pending) = Pending::acquire(&self.pending, id) else {
            return Err(BioporiError::Busy("transition"));
        };

        let echoed = match next {
            BioporiStatus::Full => self.api.mark_full(&credential, id).await?,
            BioporiStatus::Harvested => self.api.mark_harvested(&credential, id).await?,
            BioporiStatus::Active => None,
        };
        tracing::debug!(id, status = %next, "transition confirmed");

        let mut updated = echoed.filter(|r| r.id == id).unwrap_or(current);
        updated.apply_status(next);

        let mut records = self.write();
        if let Some(slot) = records.iter_mut().find(|r| r.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Drop the cache if the session changed since we last looked.
    fn observe_session(&self) {
        let mut rx = self
            .session_rx
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if rx.has_changed().unwrap_or(false) {
            let signed_in = rx.borrow_and_update().is_some();
            self.write().clear();
            tracing::debug!(signed_in, "session changed; cleared biopori cache");
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<BioporiRecord>> {
        self.records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<BioporiRecord>> {
        self.records
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

fn warn_duplicate_ids(records: &[BioporiRecord]) {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            tracing::warn!(
                id = %record.id,
                "backend returned duplicate biopori id; only the first is updated"
            );
        }
    }
}
