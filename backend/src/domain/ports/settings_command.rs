//! Driving port for display settings updates.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{DisplaySettings, Error, SettingsPatch};

/// Result of a successful settings update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdated {
    /// Confirmation for the admin panel.
    pub message: String,
    /// The settings as stored after the merge.
    pub settings: DisplaySettings,
}

/// Domain use-case port for changing display settings.
///
/// Updates are merge-on-write: fields absent from the patch keep their
/// stored values, and an invalid field rejects the whole patch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsCommand: Send + Sync {
    /// Validate `patch` and merge it into the stored settings.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-request error naming the first field that is
    /// out of range, or an internal error when storage fails.
    async fn update_settings(&self, patch: SettingsPatch) -> Result<SettingsUpdated, Error>;
}

/// Fixture command merging into the defaults without storing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSettingsCommand;

#[async_trait]
impl SettingsCommand for FixtureSettingsCommand {
    async fn update_settings(&self, patch: SettingsPatch) -> Result<SettingsUpdated, Error> {
        let settings = DisplaySettings::default().merged(&patch)?;
        Ok(SettingsUpdated {
            message: crate::domain::SETTINGS_UPDATED_MESSAGE.to_owned(),
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn fixture_command_merges_into_defaults() {
        let patch = SettingsPatch {
            mobile_students_per_row: Some(2.0),
            ..SettingsPatch::default()
        };
        let updated = FixtureSettingsCommand
            .update_settings(patch)
            .await
            .expect("valid patch");

        assert_eq!(updated.settings.mobile_students_per_row, 2);
        assert_eq!(updated.settings.scroll_speed, 600);
        assert_eq!(updated.message, "설정이 업데이트되었습니다.");
    }

    #[tokio::test]
    async fn fixture_command_rejects_invalid_patch() {
        let patch = SettingsPatch {
            font_size: Some(0.1),
            ..SettingsPatch::default()
        };
        assert!(FixtureSettingsCommand.update_settings(patch).await.is_err());
    }
}
