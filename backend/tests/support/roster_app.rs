//! Shared wiring for HTTP integration tests over a temporary data directory.

use std::path::Path;
use std::sync::{Arc, Mutex};

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::Value;

use roster::Trace;
use roster::domain::ports::{SpreadsheetReader, SpreadsheetReaderError};
use roster::domain::{RosterService, SettingsService, TabularRow};
use roster::inbound::http::configure_api;
use roster::inbound::http::state::{DEFAULT_MAX_UPLOAD_BYTES, HttpState, HttpStatePorts};
use roster::outbound::persistence::{JsonFileStore, JsonRosterRepository, JsonSettingsRepository};
use roster::outbound::spreadsheet::CalamineSpreadsheetReader;

pub const ADMIN_PASSWORD: &str = "1234";

/// Reader double that records the bytes it was given and returns fixed rows.
#[derive(Default)]
pub struct StubSpreadsheetReader {
    rows: Vec<TabularRow>,
    received: Mutex<Vec<Vec<u8>>>,
}

impl StubSpreadsheetReader {
    pub fn with_rows(rows: Vec<TabularRow>) -> Self {
        Self {
            rows,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().expect("received lock").clone()
    }
}

#[async_trait]
impl SpreadsheetReader for StubSpreadsheetReader {
    async fn read_rows(
        &self,
        workbook: Vec<u8>,
    ) -> Result<Vec<TabularRow>, SpreadsheetReaderError> {
        self.received.lock().expect("received lock").push(workbook);
        Ok(self.rows.clone())
    }
}

/// Build handler state backed by JSON files in `dir`.
pub async fn file_backed_state(dir: &Path, spreadsheets: Arc<dyn SpreadsheetReader>) -> HttpState {
    let store = JsonFileStore::open(dir).expect("open data dir");
    let roster = Arc::new(RosterService::new(
        Arc::new(JsonRosterRepository::new(store.clone())),
        ADMIN_PASSWORD,
    ));
    roster.ensure_document().await.expect("seed roster");
    let settings = Arc::new(SettingsService::new(Arc::new(JsonSettingsRepository::new(
        store,
    ))));
    HttpState::new(
        HttpStatePorts {
            login: roster.clone(),
            roster: roster.clone(),
            roster_query: roster,
            settings: settings.clone(),
            settings_query: settings,
            spreadsheets,
        },
        DEFAULT_MAX_UPLOAD_BYTES,
    )
}

/// File-backed state using the real workbook decoder.
pub async fn default_state(dir: &Path) -> HttpState {
    file_backed_state(dir, Arc::new(CalamineSpreadsheetReader)).await
}

pub async fn init_app(
    state: HttpState,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure_api),
    )
    .await
}

/// Send `request` and return the status with the JSON body.
pub async fn call_json<S>(app: &S, request: Request) -> (u16, Value)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(app, request).await;
    let status = response.status().as_u16();
    let body = test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}
