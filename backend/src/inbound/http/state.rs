//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureLoginService, FixtureRosterCommand, FixtureRosterQuery, FixtureSettingsCommand,
    FixtureSettingsQuery, FixtureSpreadsheetReader, LoginService, RosterCommand, RosterQuery,
    SettingsCommand, SettingsQuery, SpreadsheetReader,
};

/// Default cap on uploaded workbook size in bytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub roster: Arc<dyn RosterCommand>,
    pub roster_query: Arc<dyn RosterQuery>,
    pub settings: Arc<dyn SettingsCommand>,
    pub settings_query: Arc<dyn SettingsQuery>,
    pub spreadsheets: Arc<dyn SpreadsheetReader>,
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self {
            login: Arc::new(FixtureLoginService),
            roster: Arc::new(FixtureRosterCommand),
            roster_query: Arc::new(FixtureRosterQuery),
            settings: Arc::new(FixtureSettingsCommand),
            settings_query: Arc::new(FixtureSettingsQuery),
            spreadsheets: Arc::new(FixtureSpreadsheetReader::default()),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub roster: Arc<dyn RosterCommand>,
    pub roster_query: Arc<dyn RosterQuery>,
    pub settings: Arc<dyn SettingsCommand>,
    pub settings_query: Arc<dyn SettingsQuery>,
    pub spreadsheets: Arc<dyn SpreadsheetReader>,
    /// Largest accepted upload body in bytes.
    pub max_upload_bytes: usize,
}

impl HttpState {
    /// Construct state from `ports` with an explicit upload cap.
    pub fn new(ports: HttpStatePorts, max_upload_bytes: usize) -> Self {
        let HttpStatePorts {
            login,
            roster,
            roster_query,
            settings,
            settings_query,
            spreadsheets,
        } = ports;
        Self {
            login,
            roster,
            roster_query,
            settings,
            settings_query,
            spreadsheets,
            max_upload_bytes,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports, DEFAULT_MAX_UPLOAD_BYTES)
    }
}
