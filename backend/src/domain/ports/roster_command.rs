//! Driving port for roster mutations.
//!
//! HTTP handlers call this port to add and remove names. Every method
//! returns the full roster in display order so clients can re-render from
//! the response alone.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, RosterDocument, added_message, removed_all_message, removed_message};

/// Result of adding names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentsAdded {
    /// Confirmation for the admin panel.
    pub message: String,
    /// Every registered name in display order.
    pub students: Vec<String>,
    /// Names that were new, in input order.
    pub added: Vec<String>,
    /// Names skipped as already registered, in input order.
    pub duplicates: Vec<String>,
}

/// Result of a removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentsRemoved {
    /// Confirmation for the admin panel.
    pub message: String,
    /// Remaining names in display order.
    pub students: Vec<String>,
}

/// Domain use-case port for changing the roster.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterCommand: Send + Sync {
    /// Add the comma-separated names in `raw_input`.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-request error when the input holds no names or
    /// every name is already registered.
    async fn add_students(&self, raw_input: &str) -> Result<StudentsAdded, Error>;

    /// Add names extracted from an upload.
    ///
    /// Unlike [`RosterCommand::add_students`], a batch made up entirely of
    /// registered names succeeds with nothing added.
    async fn import_students(&self, names: Vec<String>) -> Result<StudentsAdded, Error>;

    /// Remove one name.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error when `name` is not registered.
    async fn remove_student(&self, name: &str) -> Result<StudentsRemoved, Error>;

    /// Remove every name.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-request error when the roster is already empty.
    async fn remove_all_students(&self) -> Result<StudentsRemoved, Error>;
}

/// Fixture command applying changes to a fresh empty roster each call.
///
/// Nothing is remembered between calls. Names come back in input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRosterCommand;

#[async_trait]
impl RosterCommand for FixtureRosterCommand {
    async fn add_students(&self, raw_input: &str) -> Result<StudentsAdded, Error> {
        let mut document = RosterDocument::default();
        let partition = document.add_new_names(crate::domain::parse_name_input(raw_input)?)?;
        Ok(StudentsAdded {
            message: added_message(partition.added.len(), partition.duplicates.len()),
            students: document.students,
            added: partition.added,
            duplicates: partition.duplicates,
        })
    }

    async fn import_students(&self, names: Vec<String>) -> Result<StudentsAdded, Error> {
        let mut document = RosterDocument::default();
        let partition = document.add_names(names);
        Ok(StudentsAdded {
            message: added_message(partition.added.len(), 0),
            students: document.students,
            added: partition.added,
            duplicates: partition.duplicates,
        })
    }

    async fn remove_student(&self, name: &str) -> Result<StudentsRemoved, Error> {
        RosterDocument::default().remove(name)?;
        Ok(StudentsRemoved {
            message: removed_message(name),
            students: Vec::new(),
        })
    }

    async fn remove_all_students(&self) -> Result<StudentsRemoved, Error> {
        let count = RosterDocument::default().remove_all()?;
        Ok(StudentsRemoved {
            message: removed_all_message(count),
            students: Vec::new(),
        })
    }
}
