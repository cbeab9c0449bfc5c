//! Port for roster document persistence.
//!
//! The roster is a single document. Adapters replace it wholesale on every
//! save; serialising read-modify-write cycles is the caller's job.

use async_trait::async_trait;

use crate::domain::RosterDocument;

use super::define_port_error;

define_port_error! {
    /// Errors raised by roster repository adapters.
    pub enum RosterRepositoryError {
        /// The backing store could not be read or written.
        Io { message: String } =>
            "roster store i/o failed: {message}",
        /// The stored document exists but does not parse.
        Corrupt { message: String } =>
            "roster document is corrupt: {message}",
    }
}

/// Port for loading and saving the roster document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Load the stored document.
    ///
    /// Returns `None` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<RosterDocument>, RosterRepositoryError>;

    /// Replace the stored document with `document`.
    ///
    /// Implementations must not leave a partially written document behind
    /// when the write fails.
    async fn save(&self, document: &RosterDocument) -> Result<(), RosterRepositoryError>;
}

/// Fixture repository for tests where persistence is not under test.
///
/// Lookups always return `None` and saves are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRosterRepository;

#[async_trait]
impl RosterRepository for FixtureRosterRepository {
    async fn load(&self) -> Result<Option<RosterDocument>, RosterRepositoryError> {
        Ok(None)
    }

    async fn save(&self, _document: &RosterDocument) -> Result<(), RosterRepositoryError> {
        Ok(())
    }
}
