//! In-memory backend shared by the directory and form tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveTime};
use sampah_auth::{MemoryStore, Session};
use sampah_client::{BioporiApi, ClientError};
use sampah_core::Credential;
use sampah_core::entities::{BioporiPayload, BioporiRecord};
use tokio::sync::Notify;

pub fn record(id: &str, name: &str, is_full: bool, is_harvested: bool) -> BioporiRecord {
    BioporiRecord {
        id: id.into(),
        name: name.into(),
        image_url: None,
        date: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
        time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
        is_full,
        is_harvested,
    }
}

pub fn signed_in() -> Arc<Session> {
    let store = MemoryStore::with(Credential::new("token").unwrap());
    Arc::new(Session::open(Arc::new(store)))
}

pub fn signed_out() -> Arc<Session> {
    Arc::new(Session::open(Arc::new(MemoryStore::default())))
}

/// Fake backend. Every call is logged; `fail` turns the next calls into 500s;
/// `gate` parks the next call until notified.
#[derive(Default)]
pub struct FakeApi {
    pub server: Mutex<Vec<BioporiRecord>>,
    pub calls: Mutex<Vec<String>>,
    pub payloads: Mutex<Vec<BioporiPayload>>,
    pub fail: AtomicBool,
    pub echo: AtomicBool,
    pub gated: AtomicBool,
    pub gate: Notify,
}

impl FakeApi {
    pub fn with(records: Vec<BioporiRecord>) -> Arc<Self> {
        Arc::new(Self {
            server: Mutex::new(records),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, call: String) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if self.gated.swap(false, Ordering::SeqCst) {
            self.gate.notified().await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClientError::Server {
                status: 500,
                message: "boom".into(),
            });
        }
        Ok(())
    }

    fn patch(&self, id: &str, f: impl FnOnce(&mut BioporiRecord)) -> Option<BioporiRecord> {
        let mut server = self.server.lock().unwrap();
        let record = server.iter_mut().find(|r| r.id == id)?;
        f(record);
        Some(record.clone())
    }

    fn echo(&self, record: Option<BioporiRecord>) -> Option<BioporiRecord> {
        record.filter(|_| self.echo.load(Ordering::SeqCst))
    }
}

impl BioporiApi for FakeApi {
    async fn list_biopori(&self, _: &Credential) -> Result<Vec<BioporiRecord>, ClientError> {
        self.enter("list".into()).await?;
        Ok(self.server.lock().unwrap().clone())
    }

    async fn get_biopori(&self, _: &Credential, id: &str) -> Result<BioporiRecord, ClientError> {
        self.enter(format!("get {id}")).await?;
        self.server
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ClientError::Server {
                status: 404,
                message: "not found".into(),
            })
    }

    async fn create_biopori(
        &self,
        _: &Credential,
        payload: &BioporiPayload,
    ) -> Result<Option<BioporiRecord>, ClientError> {
        self.enter("create".into()).await?;
        self.payloads.lock().unwrap().push(payload.clone());
        let mut server = self.server.lock().unwrap();
        let created = BioporiRecord {
            id: format!("new-{}", server.len() + 1),
            name: payload.name.clone(),
            image_url: payload.image_url.clone(),
            date: payload.date,
            time: payload.time,
            is_full: false,
            is_harvested: false,
        };
        server.push(created.clone());
        drop(server);
        Ok(self.echo(Some(created)))
    }

    async fn update_biopori(
        &self,
        _: &Credential,
        id: &str,
        payload: &BioporiPayload,
    ) -> Result<Option<BioporiRecord>, ClientError> {
        self.enter(format!("update {id}")).await?;
        self.payloads.lock().unwrap().push(payload.clone());
        let updated = self.patch(id, |r| {
            r.name.clone_from(&payload.name);
            r.image_url.clone_from(&payload.image_url);
            r.date = payload.date;
            r.time = payload.time;
        });
        Ok(self.echo(updated))
    }

    async fn mark_full(&self, _: &Credential, id: &str) -> Result<Option<BioporiRecord>, ClientError> {
        self.enter(format!("full {id}")).await?;
        let updated = self.patch(id, |r| r.is_full = true);
        Ok(self.echo(updated))
    }

    async fn mark_harvested(
        &self,
        _: &Credential,
        id: &str,
    ) -> Result<Option<BioporiRecord>, ClientError> {
        self.enter(format!("harvested {id}")).await?;
        let updated = self.patch(id, |r| r.is_harvested = true);
        Ok(self.echo(updated))
    }
}
