//! `settings.json` backed implementation of [`SettingsRepository`].

use async_trait::async_trait;

use crate::domain::DisplaySettings;
use crate::domain::ports::{SettingsRepository, SettingsRepositoryError};

use super::json_file_store::{JsonFileStore, JsonStoreError};

/// File holding the display settings inside the data directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Settings repository storing the document as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonSettingsRepository {
    store: JsonFileStore,
}

impl JsonSettingsRepository {
    /// Create a repository over `store`.
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

fn map_store_error(error: JsonStoreError) -> SettingsRepositoryError {
    if error.is_corrupt() {
        SettingsRepositoryError::corrupt(error.to_string())
    } else {
        SettingsRepositoryError::io(error.to_string())
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsRepository {
    async fn load(&self) -> Result<Option<DisplaySettings>, SettingsRepositoryError> {
        self.store.read(SETTINGS_FILE).await.map_err(map_store_error)
    }

    async fn save(&self, settings: &DisplaySettings) -> Result<(), SettingsRepositoryError> {
        self.store
            .write(SETTINGS_FILE, settings)
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
    async fn legacy_document_without_desktop_row_count_loads_default() {
        let temp = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::open(temp.path()).expect("store");
        store
            .write(
                SETTINGS_FILE,
                &serde_json::json!({
                    "scrollSpeed": 300,
                    "fontSize": 2.5,
                    "mobileScrollSpeed": 900,
                    "mobileFontSize": 1.5,
                    "mobileStudentsPerRow": 3
                }),
            )
            .await
            .expect("seed");

        let loaded = JsonSettingsRepository::new(store)
            .load()
            .await
            .expect("load")
            .expect("present");
        assert_eq!(loaded.scroll_speed, 300);
        assert_eq!(loaded.students_per_row, 7);
    }

    #[rstest]
    #[tokio::test]
    async fn saved_settings_round_trip() {
        let temp = tempfile::tempdir().expect("temp dir");
        let repo = JsonSettingsRepository::new(JsonFileStore::open(temp.path()).expect("store"));
        let settings = DisplaySettings {
            mobile_font_size: 2.25,
            ..DisplaySettings::default()
        };

        repo.save(&settings).await.expect("save");
        assert_eq!(repo.load().await.expect("load"), Some(settings));
    }
}
