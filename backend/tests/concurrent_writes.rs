//! Concurrent roster writes against one data directory.
//!
//! Every request runs its own load, modify and save cycle; none of them may
//! overwrite names another request added in the meantime.

#[path = "support/roster_app.rs"]
mod roster_app;

use std::collections::BTreeSet;
use std::sync::Arc;

use rstest::rstest;

use roster::domain::RosterService;
use roster::domain::ports::{RosterCommand, RosterQuery};
use roster::outbound::persistence::{JsonFileStore, JsonRosterRepository, ROSTER_FILE};
use roster::test_support::cap_fs::read_file_to_string;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_are_all_persisted() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = JsonFileStore::open(dir.path()).expect("store");
    let service = Arc::new(RosterService::new(
        Arc::new(JsonRosterRepository::new(store)),
        roster_app::ADMIN_PASSWORD,
    ));
    service.ensure_document().await.expect("seed");

    let tasks: Vec<_> = (0..24)
        .map(|index| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .add_students(&format!("student-{index:02}, shared-{}", index % 3))
                    .await
            })
        })
        .collect();
    for task in tasks {
        task.await.expect("task joins").expect("add succeeds");
    }

    let listed: BTreeSet<String> = service
        .list_students()
        .await
        .expect("list")
        .into_iter()
        .collect();
    let mut expected: BTreeSet<String> = (0..24).map(|index| format!("student-{index:02}")).collect();
    expected.extend((0..3).map(|index| format!("shared-{index}")));
    assert_eq!(listed, expected);

    let raw = read_file_to_string(&dir.path().join(ROSTER_FILE)).expect("roster file");
    let stored: serde_json::Value = serde_json::from_str(&raw).expect("roster JSON");
    assert_eq!(stored["students"].as_array().map(Vec::len), Some(27));
}
