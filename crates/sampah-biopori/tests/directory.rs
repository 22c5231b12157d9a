//! Listing, search, refresh, and lifecycle transitions.

mod common;

use std::sync::atomic::Ordering;

use common::{FakeApi, record, signed_in, signed_out};
use pretty_assertions::assert_eq;
use rstest::rstest;
use sampah_biopori::{BioporiError, Directory, Refresh};
use sampah_client::ClientError;
use sampah_core::CoreError;
use sampah_core::enums::BioporiStatus;

fn names(records: &[sampah_core::entities::BioporiRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

fn seeded() -> Vec<sampah_core::entities::BioporiRecord> {
    vec![
        record("1", "Lubang Depan", false, false),
        record("2", "Lubang Belakang", true, false),
        record("3", "Kebun Timur", true, true),
    ]
}

#[tokio::test]
async fn list_replaces_cache_in_server_order() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());

    let listed = directory.list().await.unwrap();

    assert_eq!(names(&listed), ["Lubang Depan", "Lubang Belakang", "Kebun Timur"]);
    assert_eq!(directory.records(), listed);
}

#[tokio::test]
async fn signed_out_list_sends_nothing() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_out());

    let err = directory.list().await.unwrap_err();

    assert!(err.is_unauthenticated());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn failed_list_keeps_previous_records() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());
    directory.list().await.unwrap();

    api.fail.store(true, Ordering::SeqCst);
    let err = directory.list().await.unwrap_err();

    assert!(matches!(err, BioporiError::Client(ClientError::Server { status: 500, .. })));
    assert_eq!(directory.records().len(), 3);
}

#[rstest]
#[case("", vec!["Lubang Depan", "Lubang Belakang", "Kebun Timur"])]
#[case("   ", vec!["Lubang Depan", "Lubang Belakang", "Kebun Timur"])]
#[case("lubang", vec!["Lubang Depan", "Lubang Belakang"])]
#[case("BELAKANG", vec!["Lubang Belakang"])]
#[case("ng be", vec!["Lubang Belakang"])]
#[case(" b", vec!["Lubang Belakang"])]
#[case("n ", vec!["Kebun Timur"])]
#[case("sawah", vec![])]
#[tokio::test]
async fn search_filters_cached_names(#[case] query: &str, #[case] expected: Vec<&str>) {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());
    directory.list().await.unwrap();

    let found = directory.search(query);

    assert_eq!(names(&found), expected);
    assert_eq!(api.calls(), ["list"], "search must not fetch");
}

#[tokio::test]
async fn refresh_in_flight_suppresses_second_refresh() {
    let api = FakeApi::with(seeded());
    api.gated.store(true, Ordering::SeqCst);
    let directory = Directory::new(api.clone(), signed_in());

    let (first, second) = tokio::join!(directory.refresh(), async {
        let second = directory.refresh().await;
        api.gate.notify_one();
        second
    });

    assert_eq!(first.unwrap(), Refresh::Completed(3));
    assert_eq!(second.unwrap(), Refresh::Skipped);
    assert_eq!(api.calls(), ["list"]);
}

#[tokio::test]
async fn refresh_guard_released_after_failure() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());

    api.fail.store(true, Ordering::SeqCst);
    assert!(directory.refresh().await.is_err());
    api.fail.store(false, Ordering::SeqCst);

    assert_eq!(directory.focus().await.unwrap(), Refresh::Completed(3));
}

#[tokio::test]
async fn mark_full_updates_cache_after_confirmation() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());
    directory.list().await.unwrap();

    let updated = directory.mark_full("1").await.unwrap();

    assert!(updated.is_full);
    assert!(!updated.is_harvested);
    assert_eq!(directory.get("1").unwrap().status(), BioporiStatus::Full);
    assert_eq!(api.calls(), ["list", "full 1"]);
}

#[tokio::test]
async fn mark_full_twice_is_rejected_locally() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());
    directory.list().await.unwrap();

    directory.mark_full("1").await.unwrap();
    let err = directory.mark_full("1").await.unwrap_err();

    assert!(matches!(err, BioporiError::Core(CoreError::InvalidTransition { .. })));
    assert_eq!(api.calls(), ["list", "full 1"]);
}

#[tokio::test]
async fn harvest_requires_full() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());
    directory.list().await.unwrap();

    let err = directory.mark_harvested("1").await.unwrap_err();

    assert!(matches!(
        err,
        BioporiError::Core(CoreError::InvalidTransition { ref from, ref to, .. })
            if from == "active" && to == "harvested"
    ));
    assert!(!directory.get("1").unwrap().is_harvested);
    assert_eq!(api.calls(), ["list"]);
}

#[tokio::test]
async fn harvested_record_accepts_no_transition() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());
    directory.list().await.unwrap();

    assert!(directory.mark_full("3").await.is_err());
    assert!(directory.mark_harvested("3").await.is_err());
    assert_eq!(api.calls(), ["list"]);
}

#[tokio::test]
async fn mark_harvested_on_full_record() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());
    directory.list().await.unwrap();

    let updated = directory.mark_harvested("2").await.unwrap();

    assert!(updated.is_full && updated.is_harvested);
    assert_eq!(directory.get("2").unwrap().status(), BioporiStatus::Harvested);
}

#[tokio::test]
async fn failed_transition_leaves_record_unchanged() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());
    directory.list().await.unwrap();
    let before = directory.get("1").unwrap();

    api.fail.store(true, Ordering::SeqCst);
    assert!(directory.mark_full("1").await.is_err());

    assert_eq!(directory.get("1").unwrap(), before);
    api.fail.store(false, Ordering::SeqCst);
    assert!(directory.mark_full("1").await.is_ok(), "pending slot must be released");
}

#[tokio::test]
async fn duplicate_transition_while_pending_is_busy() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());
    directory.list().await.unwrap();
    api.gated.store(true, Ordering::SeqCst);

    let (first, second) = tokio::join!(directory.mark_full("1"), async {
        let second = directory.mark_full("1").await;
        api.gate.notify_one();
        second
    });

    assert!(first.unwrap().is_full);
    assert!(matches!(second.unwrap_err(), BioporiError::Busy(_)));
    assert_eq!(api.calls(), ["list", "full 1"]);
}

#[tokio::test]
async fn echoed_record_replaces_local_copy_without_clearing_flags() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());
    directory.list().await.unwrap();
    api.server.lock().unwrap()[0].name = "Renamed".into();
    api.echo.store(true, Ordering::SeqCst);

    let updated = directory.mark_full("1").await.unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(updated.is_full);
    assert_eq!(directory.get("1").unwrap(), updated);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let api = FakeApi::with(seeded());
    let directory = Directory::new(api.clone(), signed_in());
    directory.list().await.unwrap();

    let err = directory.mark_full("missing").await.unwrap_err();

    assert!(matches!(err, BioporiError::Core(CoreError::NotFound { .. })));
}

#[tokio::test]
async fn transition_without_credential_sends_nothing() {
    let api = FakeApi::with(seeded());
    let session = signed_in();
    let directory = Directory::new(api.clone(), session.clone());
    directory.list().await.unwrap();

    session.logout().unwrap();
    let err = directory.mark_full("1").await.unwrap_err();

    assert!(err.is_unauthenticated());
    assert_eq!(api.calls(), ["list"]);
}

#[tokio::test]
async fn logout_clears_cached_records() {
    let api = FakeApi::with(seeded());
    let session = signed_in();
    let directory = Directory::new(api.clone(), session.clone());
    directory.list().await.unwrap();
    assert_eq!(directory.records().len(), 3);

    session.logout().unwrap();

    assert!(directory.records().is_empty());
    assert!(directory.search("lubang").is_empty());
}

#[tokio::test]
async fn logout_during_list_discards_the_fetch() {
    let api = FakeApi::with(seeded());
    api.gated.store(true, Ordering::SeqCst);
    let session = signed_in();
    let directory = Directory::new(api.clone(), session.clone());

    let (listed, ()) = tokio::join!(directory.list(), async {
        session.logout().unwrap();
        api.gate.notify_one();
    });

    assert!(listed.unwrap_err().is_unauthenticated());
    assert_eq!(api.calls(), ["list"]);
    assert!(directory.records().is_empty());
}

#[tokio::test]
async fn duplicate_ids_are_kept_in_server_order() {
    let api = FakeApi::with(vec![
        record("1", "Lubang Depan", false, false),
        record("1", "Lubang Kembar", false, false),
    ]);
    let directory = Directory::new(api.clone(), signed_in());

    let listed = directory.list().await.unwrap();

    assert_eq!(names(&listed), ["Lubang Depan", "Lubang Kembar"]);
    assert_eq!(directory.get("1").unwrap().name, "Lubang Depan");
}
