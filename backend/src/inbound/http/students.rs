//! Roster HTTP handlers.
//!
//! ```text
//! GET    /api/students
//! POST   /api/students {"name":"김민준, 이서연"}
//! DELETE /api/students/{name}
//! DELETE /api/students
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{StudentsAdded, StudentsRemoved};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/students`.
///
/// `name` holds one or more comma-separated names.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddStudentsRequest {
    #[serde(default)]
    #[schema(example = "김민준, 이서연")]
    pub name: String,
}

/// Registered names in display order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentsResponse {
    pub students: Vec<String>,
}

/// Response body for a successful add.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentsAddedResponse {
    pub success: bool,
    #[schema(example = "2명이 추가되었습니다.")]
    pub message: String,
    pub students: Vec<String>,
    pub added: Vec<String>,
    pub duplicates: Vec<String>,
}

impl From<StudentsAdded> for StudentsAddedResponse {
    fn from(value: StudentsAdded) -> Self {
        Self {
            success: true,
            message: value.message,
            students: value.students,
            added: value.added,
            duplicates: value.duplicates,
        }
    }
}

/// Response body for a successful removal.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentsRemovedResponse {
    pub success: bool,
    pub message: String,
    pub students: Vec<String>,
}

impl From<StudentsRemoved> for StudentsRemovedResponse {
    fn from(value: StudentsRemoved) -> Self {
        Self {
            success: true,
            message: value.message,
            students: value.students,
        }
    }
}

/// List registered names in Korean collation order.
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (
            status = 200,
            description = "Registered names",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = StudentsResponse
        ),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "listStudents"
)]
#[get("/students")]
pub async fn list_students(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let students = state.roster_query.list_students().await?;
    Ok(HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-cache"))
        .json(StudentsResponse { students }))
}

/// Add comma-separated names to the roster.
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = AddStudentsRequest,
    responses(
        (status = 200, description = "Names added", body = StudentsAddedResponse),
        (status = 400, description = "No usable or new names", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "addStudents"
)]
#[post("/students")]
pub async fn add_students(
    state: web::Data<HttpState>,
    payload: web::Json<AddStudentsRequest>,
) -> ApiResult<web::Json<StudentsAddedResponse>> {
    let outcome = state.roster.add_students(&payload.name).await?;
    Ok(web::Json(outcome.into()))
}

/// Remove one name from the roster.
#[utoipa::path(
    delete,
    path = "/api/students/{name}",
    params(("name" = String, Path, description = "Registered name, percent-encoded")),
    responses(
        (status = 200, description = "Name removed", body = StudentsRemovedResponse),
        (status = 404, description = "Name not registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "removeStudent"
)]
#[delete("/students/{name}")]
pub async fn remove_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<StudentsRemovedResponse>> {
    let name = path.into_inner();
    let outcome = state.roster.remove_student(&name).await?;
    Ok(web::Json(outcome.into()))
}

/// Remove every name from the roster.
#[utoipa::path(
    delete,
    path = "/api/students",
    responses(
        (status = 200, description = "Roster cleared", body = StudentsRemovedResponse),
        (status = 400, description = "Roster already empty", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "removeAllStudents"
)]
#[delete("/students")]
pub async fn remove_all_students(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<StudentsRemovedResponse>> {
    let outcome = state.roster.remove_all_students().await?;
    Ok(web::Json(outcome.into()))
}

#[cfg(test)]
#[path = "students_tests.rs"]
mod tests;
