//! File-backed persistence adapters.
//!
//! Both documents live side by side in one data directory as
//! pretty-printed JSON. The repositories are thin translators over
//! [`JsonFileStore`]; locking lives in the domain services.

mod json_file_store;
mod json_roster_repository;
mod json_settings_repository;

pub use json_file_store::{JsonFileStore, JsonStoreError};
pub use json_roster_repository::{JsonRosterRepository, ROSTER_FILE};
pub use json_settings_repository::{JsonSettingsRepository, SETTINGS_FILE};
