//! Driving port for reading display settings.
//!
//! Implementations create and persist the defaults when no settings have
//! been stored yet.

use async_trait::async_trait;

use crate::domain::{DisplaySettings, Error};

/// Domain use-case port for fetching display settings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsQuery: Send + Sync {
    /// Current settings, falling back to stored defaults on first run.
    async fn fetch_settings(&self) -> Result<DisplaySettings, Error>;
}

/// Fixture query returning the defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSettingsQuery;

#[async_trait]
impl SettingsQuery for FixtureSettingsQuery {
    async fn fetch_settings(&self) -> Result<DisplaySettings, Error> {
        Ok(DisplaySettings::default())
    }
}
