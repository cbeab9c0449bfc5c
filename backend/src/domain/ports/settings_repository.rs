//! Port for display settings persistence.

use async_trait::async_trait;

use crate::domain::DisplaySettings;

use super::define_port_error;

define_port_error! {
    /// Errors raised by settings repository adapters.
    pub enum SettingsRepositoryError {
        /// The backing store could not be read or written.
        Io { message: String } =>
            "settings store i/o failed: {message}",
        /// The stored document exists but does not parse.
        Corrupt { message: String } =>
            "settings document is corrupt: {message}",
    }
}

/// Port for loading and saving the display settings document.
///
/// Callers initialise defaults when [`SettingsRepository::load`] returns
/// `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load the stored settings, or `None` on first run.
    async fn load(&self) -> Result<Option<DisplaySettings>, SettingsRepositoryError>;

    /// Replace the stored settings.
    async fn save(&self, settings: &DisplaySettings) -> Result<(), SettingsRepositoryError>;
}

/// Fixture repository that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSettingsRepository;

#[async_trait]
impl SettingsRepository for FixtureSettingsRepository {
    async fn load(&self) -> Result<Option<DisplaySettings>, SettingsRepositoryError> {
        Ok(None)
    }

    async fn save(&self, _settings: &DisplaySettings) -> Result<(), SettingsRepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_repository_round_trip_is_empty() {
        let repo = FixtureSettingsRepository;
        repo.save(&DisplaySettings::default())
            .await
            .expect("fixture save should succeed");
        assert!(repo.load().await.expect("fixture load").is_none());
    }
}
