//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. Internal failures are logged in full and reach the client only as
//! a generic message, or as one of the fixed messages written for clients.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::error;

pub use crate::domain::ApiResult;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::upload::PROCESSING_FAILED_MESSAGE;

/// Message shown to clients in place of internal error details.
pub const GENERIC_SERVER_ERROR: &str = "서버 오류가 발생했습니다.";

/// Internal messages that are safe to show as-is. Their details are still
/// withheld.
const PUBLIC_INTERNAL_MESSAGES: [&str; 1] = [PROCESSING_FAILED_MESSAGE];

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(
            trace_id = error.trace_id().unwrap_or_default(),
            error = %error,
            details = ?error.details(),
            "internal error"
        );
        let message = if PUBLIC_INTERNAL_MESSAGES.contains(&error.message()) {
            error.message()
        } else {
            GENERIC_SERVER_ERROR
        };
        let mut redacted = Error::internal(message);
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(GENERIC_SERVER_ERROR)
    }
}

/// JSON extractor configuration reporting malformed bodies as domain
/// validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("요청 형식이 올바르지 않습니다.")
        .with_details(json!({ "reason": err.to_string() }))
        .into()
}
