//! Roster domain service.
//!
//! Implements the roster driving ports and the admin login check over a
//! [`RosterRepository`]. Every mutation runs load, modify and save while
//! holding one async lock, so concurrent requests cannot overwrite each
//! other's changes.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::ports::{
    LoginService, RosterCommand, RosterQuery, RosterRepository, RosterRepositoryError,
    StudentsAdded, StudentsRemoved, WRONG_PASSWORD_MESSAGE,
};
use crate::domain::{
    Error, LoginCredentials, RosterDocument, added_message, parse_name_input,
    removed_all_message, removed_message, sorted_for_display,
};

/// Roster service implementing the roster and login ports.
#[derive(Clone)]
pub struct RosterService<R> {
    repository: Arc<R>,
    write_lock: Arc<Mutex<()>>,
    initial_admin_password: String,
}

impl<R> RosterService<R> {
    /// Create a service over `repository`.
    ///
    /// `initial_admin_password` guards the roster created on first run.
    pub fn new(repository: Arc<R>, initial_admin_password: impl Into<String>) -> Self {
        Self {
            repository,
            write_lock: Arc::new(Mutex::new(())),
            initial_admin_password: initial_admin_password.into(),
        }
    }
}

impl<R> RosterService<R>
where
    R: RosterRepository,
{
    fn map_repository_error(error: RosterRepositoryError) -> Error {
        match error {
            RosterRepositoryError::Io { message } => {
                Error::internal(format!("roster store unavailable: {message}"))
            }
            RosterRepositoryError::Corrupt { message } => {
                Error::internal(format!("roster document unreadable: {message}"))
            }
        }
    }

    async fn load_or_seed(&self) -> Result<RosterDocument, Error> {
        let stored = self
            .repository
            .load()
            .await
            .map_err(Self::map_repository_error)?;
        Ok(stored.unwrap_or_else(|| RosterDocument::new(self.initial_admin_password.clone())))
    }

    /// Write the first-run roster if none is stored yet.
    ///
    /// Returns `true` when a document was created.
    pub async fn ensure_document(&self) -> Result<bool, Error> {
        let _guard = self.write_lock.lock().await;
        let stored = self
            .repository
            .load()
            .await
            .map_err(Self::map_repository_error)?;
        if stored.is_some() {
            return Ok(false);
        }
        let document = RosterDocument::new(self.initial_admin_password.clone());
        self.repository
            .save(&document)
            .await
            .map_err(Self::map_repository_error)?;
        if document.admin_password.is_empty() {
            warn!("roster created without an admin password; login is disabled until one is set");
        } else {
            info!("created empty roster document");
        }
        Ok(true)
    }

    /// Run one locked read-modify-write cycle.
    ///
    /// Nothing is saved when `change` fails.
    async fn modify<T, F>(&self, change: F) -> Result<(T, RosterDocument), Error>
    where
        F: FnOnce(&mut RosterDocument) -> Result<T, Error> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load_or_seed().await?;
        let outcome = change(&mut document)?;
        self.repository
            .save(&document)
            .await
            .map_err(Self::map_repository_error)?;
        Ok((outcome, document))
    }
}

#[async_trait]
impl<R> RosterQuery for RosterService<R>
where
    R: RosterRepository,
{
    async fn list_students(&self) -> Result<Vec<String>, Error> {
        let document = self.load_or_seed().await?;
        sorted_for_display(&document.students)
    }
}

#[async_trait]
impl<R> RosterCommand for RosterService<R>
where
    R: RosterRepository,
{
    async fn add_students(&self, raw_input: &str) -> Result<StudentsAdded, Error> {
        let candidates = parse_name_input(raw_input)?;
        let (partition, document) = self
            .modify(move |document| document.add_new_names(candidates))
            .await?;
        info!(
            added = partition.added.len(),
            duplicates = partition.duplicates.len(),
            "students added"
        );
        Ok(StudentsAdded {
            message: added_message(partition.added.len(), partition.duplicates.len()),
            students: sorted_for_display(&document.students)?,
            added: partition.added,
            duplicates: partition.duplicates,
        })
    }

    async fn import_students(&self, names: Vec<String>) -> Result<StudentsAdded, Error> {
        let (partition, document) = self
            .modify(move |document| Ok(document.add_names(names)))
            .await?;
        info!(
            added = partition.added.len(),
            duplicates = partition.duplicates.len(),
            "students imported"
        );
        Ok(StudentsAdded {
            message: added_message(partition.added.len(), 0),
            students: sorted_for_display(&document.students)?,
            added: partition.added,
            duplicates: partition.duplicates,
        })
    }

    async fn remove_student(&self, name: &str) -> Result<StudentsRemoved, Error> {
        let ((), document) = self.modify(|document| document.remove(name)).await?;
        info!("student removed");
        Ok(StudentsRemoved {
            message: removed_message(name),
            students: sorted_for_display(&document.students)?,
        })
    }

    async fn remove_all_students(&self) -> Result<StudentsRemoved, Error> {
        let (count, _) = self.modify(RosterDocument::remove_all).await?;
        info!(count, "roster cleared");
        Ok(StudentsRemoved {
            message: removed_all_message(count),
            students: Vec::new(),
        })
    }
}

#[async_trait]
impl<R> LoginService for RosterService<R>
where
    R: RosterRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), Error> {
        let document = self.load_or_seed().await?;
        if credentials.matches(&document.admin_password) {
            Ok(())
        } else {
            warn!("admin login rejected");
            Err(Error::unauthorized(WRONG_PASSWORD_MESSAGE))
        }
    }
}

#[cfg(test)]
#[path = "roster_service_tests.rs"]
mod tests;
