//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The admin password did not match.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested name is not registered.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// The human-readable message travels under `error`.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message shown by the admin panel.
    #[schema(example = "이름을 입력해주세요.")]
    error: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the offending settings field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::DisplaySettings`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DisplaySettings)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DisplaySettingsSchema {
    /// Desktop scroll duration in seconds (30 to 1800).
    #[schema(rename = "scrollSpeed", example = 600)]
    scroll_speed: u32,
    /// Desktop font size in rem (0.5 to 5).
    #[schema(rename = "fontSize", example = 2.0)]
    font_size: f64,
    /// Names per row on desktop (1 to 10).
    #[schema(rename = "studentsPerRow", example = 7)]
    students_per_row: u32,
    /// Mobile scroll duration in seconds (30 to 1800).
    #[schema(rename = "mobileScrollSpeed", example = 900)]
    mobile_scroll_speed: u32,
    /// Mobile font size in rem (0.5 to 5).
    #[schema(rename = "mobileFontSize", example = 1.5)]
    mobile_font_size: f64,
    /// Names per row on mobile (1 to 6).
    #[schema(rename = "mobileStudentsPerRow", example = 3)]
    mobile_students_per_row: u32,
}
