//! Create/edit form behaviour.

mod common;

use std::sync::atomic::Ordering;

use chrono::{NaiveDate, NaiveTime};
use common::{FakeApi, record, signed_in, signed_out};
use pretty_assertions::assert_eq;
use sampah_biopori::{BioporiError, BioporiForm, FormMode, FormValues};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn filled(api: std::sync::Arc<FakeApi>, session: std::sync::Arc<sampah_auth::Session>) -> BioporiForm<FakeApi> {
    let mut form = BioporiForm::create(api, session);
    form.set_name("Lubang Baru");
    form.set_image_url(Some("file:///tmp/foto.jpg".into()));
    form.set_date(date(2025, 12, 15));
    form.set_time(time(8, 30));
    form
}

#[tokio::test]
async fn create_posts_payload_with_derived_end() {
    let api = FakeApi::with(vec![]);
    let form = filled(api.clone(), signed_in());

    form.submit().await.unwrap();

    let payloads = api.payloads.lock().unwrap().clone();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].name, "Lubang Baru");
    assert_eq!(payloads[0].image_url.as_deref(), Some("file:///tmp/foto.jpg"));
    assert_eq!(payloads[0].end_date, date(2026, 2, 13));
    assert_eq!(payloads[0].end_time, time(8, 30));
    assert_eq!(api.calls(), ["create"]);
}

#[tokio::test]
async fn end_schedule_preview_follows_date() {
    let api = FakeApi::with(vec![]);
    let mut form = BioporiForm::create(api, signed_in());
    assert!(form.end_schedule().is_none());

    form.set_date(date(2024, 1, 1));
    form.set_time(time(23, 59));
    let schedule = form.end_schedule().unwrap();

    assert_eq!(schedule.end_date, date(2024, 3, 1));
    assert_eq!(schedule.end_time, time(23, 59));
}

#[tokio::test]
async fn invalid_input_sends_nothing() {
    let api = FakeApi::with(vec![]);
    let session = signed_in();

    let mut blank_name = filled(api.clone(), session.clone());
    blank_name.set_name("   ");
    assert!(blank_name.submit().await.unwrap_err().is_validation());

    let no_date = BioporiForm::create(api.clone(), session.clone());
    assert!(no_date.submit().await.unwrap_err().is_validation());

    let mut no_time = BioporiForm::create(api.clone(), session);
    no_time.set_name("Lubang");
    no_time.set_date(date(2025, 1, 1));
    assert!(no_time.submit().await.unwrap_err().is_validation());

    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn signed_out_submit_is_unauthenticated() {
    let api = FakeApi::with(vec![]);
    let form = filled(api.clone(), signed_out());

    assert!(form.submit().await.unwrap_err().is_unauthenticated());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn failed_submit_retains_values() {
    let api = FakeApi::with(vec![]);
    let form = filled(api.clone(), signed_in());
    let before = form.values().clone();

    api.fail.store(true, Ordering::SeqCst);
    assert!(form.submit().await.is_err());

    assert_eq!(form.values(), &before);
    assert!(!form.is_submitting());
    api.fail.store(false, Ordering::SeqCst);
    assert!(form.submit().await.is_ok());
}

#[tokio::test]
async fn second_submit_while_in_flight_is_busy() {
    let api = FakeApi::with(vec![]);
    api.gated.store(true, Ordering::SeqCst);
    let form = filled(api.clone(), signed_in());

    let (first, second) = tokio::join!(form.submit(), async {
        let second = form.submit().await;
        api.gate.notify_one();
        second
    });

    assert!(first.is_ok());
    assert!(matches!(second.unwrap_err(), BioporiError::Busy(_)));
    assert_eq!(api.calls(), ["create"]);
}

#[tokio::test]
async fn edit_prepopulates_and_updates_by_id() {
    let mut existing = record("b7", "Lama", false, false);
    existing.image_url = Some("https://img/lama.jpg".into());
    let api = FakeApi::with(vec![existing.clone()]);
    api.echo.store(true, Ordering::SeqCst);

    let mut form = BioporiForm::edit(api.clone(), signed_in(), "b7").await.unwrap();
    assert_eq!(form.mode(), &FormMode::Edit { id: "b7".into() });
    assert_eq!(form.values(), &FormValues::from(&existing));

    form.set_name("Baru");
    let saved = form.submit().await.unwrap().unwrap();

    assert_eq!(saved.name, "Baru");
    assert_eq!(saved.image_url.as_deref(), Some("https://img/lama.jpg"));
    assert_eq!(api.calls(), ["get b7", "update b7"]);
}

#[tokio::test]
async fn edit_of_missing_record_fails() {
    let api = FakeApi::with(vec![]);
    let err = BioporiForm::edit(api, signed_in(), "nope").await.err().unwrap();
    assert!(matches!(err, BioporiError::Client(_)));
}
