//! Spreadsheet upload handler.
//!
//! ```text
//! POST /api/students/upload   multipart/form-data, file part named "file"
//! ```
//!
//! The workbook is buffered in memory up to the configured cap, decoded by
//! the spreadsheet port and handed to the roster as an import. Nothing is
//! written to disk besides the roster document itself.

use std::ffi::OsStr;
use std::path::Path;

use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{post, web};
use futures_util::TryStreamExt as _;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::ports::StudentsAdded;
use crate::domain::{Error, extract_names};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

const FILE_FIELD: &str = "file";
const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

const NO_FILE_MESSAGE: &str = "파일을 선택해주세요.";
const UNSUPPORTED_FILE_MESSAGE: &str = "엑셀 파일만 업로드 가능합니다.";
const FILE_TOO_LARGE_MESSAGE: &str = "파일 크기가 너무 큽니다.";
pub(crate) const PROCESSING_FAILED_MESSAGE: &str = "파일 처리 중 오류가 발생했습니다.";

/// Response body for a processed upload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    #[schema(example = "12명이 추가되었습니다.")]
    pub message: String,
    pub added: Vec<String>,
    pub duplicates: Vec<String>,
    pub total_students: usize,
    pub students: Vec<String>,
}

impl From<StudentsAdded> for UploadResponse {
    fn from(value: StudentsAdded) -> Self {
        Self {
            success: true,
            message: value.message,
            added: value.added,
            duplicates: value.duplicates,
            total_students: value.students.len(),
            students: value.students,
        }
    }
}

/// Multipart form accepted by the upload endpoint, for documentation only.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UploadForm {
    /// `.xlsx` or `.xls` workbook; names are read from the first sheet.
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[derive(Debug)]
struct UploadedWorkbook {
    filename: Option<String>,
    bytes: Vec<u8>,
}

fn has_spreadsheet_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

fn map_multipart_error(err: MultipartError) -> Error {
    Error::invalid_request(NO_FILE_MESSAGE).with_details(json!({ "reason": err.to_string() }))
}

async fn read_field(mut field: Field, max_bytes: usize) -> ApiResult<Vec<u8>> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(map_multipart_error)? {
        if bytes.len() + chunk.len() > max_bytes {
            return Err(Error::invalid_request(FILE_TOO_LARGE_MESSAGE)
                .with_details(json!({ "maxBytes": max_bytes })));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

/// Pull the `file` part out of the form, skipping any other parts.
async fn read_workbook(
    payload: &mut Multipart,
    max_bytes: usize,
) -> ApiResult<Option<UploadedWorkbook>> {
    while let Some(field) = payload.try_next().await.map_err(map_multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field
            .content_disposition()
            .and_then(|disposition| disposition.get_filename())
            .map(str::to_owned);
        let bytes = read_field(field, max_bytes).await?;
        return Ok(Some(UploadedWorkbook { filename, bytes }));
    }
    Ok(None)
}

/// Bulk-add names from the first sheet of an uploaded workbook.
///
/// Names already on the roster are reported as duplicates; an upload made
/// up entirely of registered names succeeds with nothing added.
#[utoipa::path(
    post,
    path = "/api/students/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Workbook imported", body = UploadResponse),
        (
            status = 400,
            description = "No file, wrong extension, file too large, no name column or no names",
            body = ErrorSchema
        ),
        (status = 500, description = "Workbook could not be processed", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "uploadStudents"
)]
#[post("/students/upload")]
pub async fn upload_students(
    state: web::Data<HttpState>,
    mut payload: Multipart,
) -> ApiResult<web::Json<UploadResponse>> {
    let Some(workbook) = read_workbook(&mut payload, state.max_upload_bytes).await? else {
        return Err(Error::invalid_request(NO_FILE_MESSAGE));
    };
    let filename = workbook.filename.unwrap_or_default();
    if !has_spreadsheet_extension(&filename) {
        return Err(Error::invalid_request(UNSUPPORTED_FILE_MESSAGE)
            .with_details(json!({ "filename": filename })));
    }

    let rows = state
        .spreadsheets
        .read_rows(workbook.bytes)
        .await
        .map_err(|err| {
            warn!(filename = %filename, error = %err, "workbook decoding failed");
            Error::internal(PROCESSING_FAILED_MESSAGE).with_details(json!({
                "filename": filename,
                "reason": err.to_string(),
            }))
        })?;
    let extracted = extract_names(&rows)?;
    info!(
        filename = %filename,
        column = %extracted.column_used,
        names = extracted.names.len(),
        "workbook names extracted"
    );

    let outcome = state.roster.import_students(extracted.names).await?;
    Ok(web::Json(outcome.into()))
}

#[cfg(test)]
#[path = "upload_tests.rs"]
mod tests;
