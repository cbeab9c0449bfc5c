//! Display settings domain service.
//!
//! Implements the settings driving ports over a [`SettingsRepository`].
//! Reads persist the defaults on first access; updates validate, merge and
//! save under one lock.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::ports::{
    SettingsCommand, SettingsQuery, SettingsRepository, SettingsRepositoryError, SettingsUpdated,
};
use crate::domain::{DisplaySettings, Error, SETTINGS_UPDATED_MESSAGE, SettingsPatch};

/// Settings service implementing the settings ports.
#[derive(Clone)]
pub struct SettingsService<S> {
    repository: Arc<S>,
    write_lock: Arc<Mutex<()>>,
}

impl<S> SettingsService<S> {
    /// Create a service over `repository`.
    pub fn new(repository: Arc<S>) -> Self {
        Self {
            repository,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

impl<S> SettingsService<S>
where
    S: SettingsRepository,
{
    fn map_repository_error(error: SettingsRepositoryError) -> Error {
        match error {
            SettingsRepositoryError::Io { message } => {
                Error::internal(format!("settings store unavailable: {message}"))
            }
            SettingsRepositoryError::Corrupt { message } => {
                Error::internal(format!("settings document unreadable: {message}"))
            }
        }
    }

    /// Load the stored settings, writing the defaults when none exist.
    ///
    /// Callers must hold `write_lock`.
    async fn fetch_or_create_defaults(&self) -> Result<DisplaySettings, Error> {
        if let Some(settings) = self
            .repository
            .load()
            .await
            .map_err(Self::map_repository_error)?
        {
            return Ok(settings);
        }

        let defaults = DisplaySettings::default();
        self.repository
            .save(&defaults)
            .await
            .map_err(Self::map_repository_error)?;
        info!("stored default display settings");
        Ok(defaults)
    }
}

#[async_trait]
impl<S> SettingsQuery for SettingsService<S>
where
    S: SettingsRepository,
{
    async fn fetch_settings(&self) -> Result<DisplaySettings, Error> {
        let _guard = self.write_lock.lock().await;
        self.fetch_or_create_defaults().await
    }
}

#[async_trait]
impl<S> SettingsCommand for SettingsService<S>
where
    S: SettingsRepository,
{
    async fn update_settings(&self, patch: SettingsPatch) -> Result<SettingsUpdated, Error> {
        patch.validate()?;

        let _guard = self.write_lock.lock().await;
        let current = self.fetch_or_create_defaults().await?;
        let settings = current.merged(&patch)?;
        self.repository
            .save(&settings)
            .await
            .map_err(Self::map_repository_error)?;
        info!(?settings, "display settings updated");

        Ok(SettingsUpdated {
            message: SETTINGS_UPDATED_MESSAGE.to_owned(),
            settings,
        })
    }
}
