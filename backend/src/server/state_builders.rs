//! Wiring of file-backed services into the HTTP state.

use std::io;
use std::sync::Arc;

use tracing::info;

use roster::domain::{RosterService, SettingsService};
use roster::inbound::http::state::{HttpState, HttpStatePorts};
use roster::outbound::persistence::{JsonFileStore, JsonRosterRepository, JsonSettingsRepository};
use roster::outbound::spreadsheet::CalamineSpreadsheetReader;

use super::ServerConfig;

/// Open the data directory, make sure the roster document exists and build
/// the handler state around the file-backed services.
///
/// # Errors
/// Returns [`io::Error`] when the data directory cannot be opened or the
/// roster document cannot be read or created.
pub(crate) async fn build_http_state(config: &ServerConfig) -> io::Result<HttpState> {
    let store = JsonFileStore::open(&config.data_dir).map_err(|err| {
        io::Error::other(format!(
            "failed to open data directory {}: {err}",
            config.data_dir.display()
        ))
    })?;

    let roster = Arc::new(RosterService::new(
        Arc::new(JsonRosterRepository::new(store.clone())),
        config.initial_admin_password.as_str(),
    ));
    let created = roster
        .ensure_document()
        .await
        .map_err(|err| io::Error::other(format!("failed to initialise roster: {err}")))?;
    info!(data_dir = %store.root().display(), created, "roster document ready");

    let settings = Arc::new(SettingsService::new(Arc::new(JsonSettingsRepository::new(
        store,
    ))));

    let ports = HttpStatePorts {
        login: roster.clone(),
        roster: roster.clone(),
        roster_query: roster,
        settings: settings.clone(),
        settings_query: settings,
        spreadsheets: Arc::new(CalamineSpreadsheetReader),
    };
    Ok(HttpState::new(ports, config.max_upload_bytes))
}
