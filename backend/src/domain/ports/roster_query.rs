//! Driving port for reading the roster.

use async_trait::async_trait;

use crate::domain::Error;

/// Domain use-case port for listing registered names.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterQuery: Send + Sync {
    /// Every registered name in Korean display order.
    async fn list_students(&self) -> Result<Vec<String>, Error>;
}

/// Fixture query returning an empty roster.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRosterQuery;

#[async_trait]
impl RosterQuery for FixtureRosterQuery {
    async fn list_students(&self) -> Result<Vec<String>, Error> {
        Ok(Vec::new())
    }
}
