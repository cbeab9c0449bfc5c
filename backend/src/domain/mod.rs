//! Domain primitives, rules and services.
//!
//! Purpose: hold the roster and display-settings rules independently of
//! HTTP and storage. Types document their invariants and serialisation
//! contracts (serde) in their Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - RosterDocument / DisplaySettings: the two persisted documents.
//! - extract_names: picks the name column out of uploaded rows.
//! - RosterService / SettingsService: implementations of the driving ports.

pub mod auth;
pub mod collation;
pub mod error;
pub mod ingestion;
pub mod ports;
pub mod roster;
mod roster_service;
pub mod settings;
mod settings_service;
pub mod trace_id;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::collation::{DisplayCollation, sorted_for_display};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ingestion::{
    CellValue, ExtractedNames, IngestionError, NAME_COLUMN_CANDIDATES, TabularRow, extract_names,
};
pub use self::roster::{
    NamePartition, RosterDocument, added_message, parse_name_input, removed_all_message,
    removed_message,
};
pub use self::roster_service::RosterService;
pub(crate) use self::settings::SETTINGS_UPDATED_MESSAGE;
pub use self::settings::{DisplaySettings, FIELD_RULES, FieldRule, SettingsField, SettingsPatch};
pub use self::settings_service::SettingsService;
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use roster::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
