//! `students.json` backed implementation of [`RosterRepository`].

use async_trait::async_trait;

use crate::domain::RosterDocument;
use crate::domain::ports::{RosterRepository, RosterRepositoryError};

use super::json_file_store::{JsonFileStore, JsonStoreError};

/// File holding the roster document inside the data directory.
pub const ROSTER_FILE: &str = "students.json";

/// Roster repository storing the document as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonRosterRepository {
    store: JsonFileStore,
}

impl JsonRosterRepository {
    /// Create a repository over `store`.
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

fn map_store_error(error: JsonStoreError) -> RosterRepositoryError {
    if error.is_corrupt() {
        RosterRepositoryError::corrupt(error.to_string())
    } else {
        RosterRepositoryError::io(error.to_string())
    }
}

#[async_trait]
impl RosterRepository for JsonRosterRepository {
    async fn load(&self) -> Result<Option<RosterDocument>, RosterRepositoryError> {
        self.store.read(ROSTER_FILE).await.map_err(map_store_error)
    }

    async fn save(&self, document: &RosterDocument) -> Result<(), RosterRepositoryError> {
        self.store
            .write(ROSTER_FILE, document)
            .await
            .map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn round_trips_through_students_json() {
        let temp = tempfile::tempdir().expect("temp dir");
        let repo = JsonRosterRepository::new(JsonFileStore::open(temp.path()).expect("store"));
        assert!(repo.load().await.expect("load").is_none());

        let document = RosterDocument {
            students: vec!["Kim".to_owned(), "이서연".to_owned()],
            admin_password: "pw".to_owned(),
        };
        repo.save(&document).await.expect("save");

        assert_eq!(repo.load().await.expect("load"), Some(document));
        assert!(temp.path().join(ROSTER_FILE).is_file());
    }

    #[rstest]
    #[tokio::test]
    async fn reads_documents_written_by_hand() {
        let temp = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::open(temp.path()).expect("store");
        store
            .write(
                ROSTER_FILE,
                &serde_json::json!({ "students": ["Lee"], "adminPassword": "1234" }),
            )
            .await
            .expect("seed");

        let loaded = JsonRosterRepository::new(store)
            .load()
            .await
            .expect("load")
            .expect("present");
        assert_eq!(loaded.students, ["Lee"]);
        assert_eq!(loaded.admin_password, "1234");
    }

    #[rstest]
    #[tokio::test]
    async fn wrong_shape_is_corrupt() {
        let temp = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::open(temp.path()).expect("store");
        store
            .write(ROSTER_FILE, &serde_json::json!({ "students": "Kim" }))
            .await
            .expect("seed");

        let err = JsonRosterRepository::new(store)
            .load()
            .await
            .expect_err("students must be a list");
        assert!(matches!(err, RosterRepositoryError::Corrupt { .. }));
    }
}
