//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//! [`DisplaySettingsSchema`]) that describe domain types without coupling
//! them to utoipa. Swagger UI serves the document in debug builds.

use crate::inbound::http::login::{LoginRequest, LoginResponse};
use crate::inbound::http::schemas::{DisplaySettingsSchema, ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::settings::{SettingsRequest, SettingsUpdatedResponse};
use crate::inbound::http::students::{
    AddStudentsRequest, StudentsAddedResponse, StudentsRemovedResponse, StudentsResponse,
};
use crate::inbound::http::upload::{UploadForm, UploadResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "Name roster and display settings for the scrolling registration board."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::login::login,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::add_students,
        crate::inbound::http::students::remove_student,
        crate::inbound::http::students::remove_all_students,
        crate::inbound::http::upload::upload_students,
        crate::inbound::http::settings::get_settings,
        crate::inbound::http::settings::update_settings,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        DisplaySettingsSchema,
        LoginRequest,
        LoginResponse,
        AddStudentsRequest,
        StudentsResponse,
        StudentsAddedResponse,
        StudentsRemovedResponse,
        UploadForm,
        UploadResponse,
        SettingsRequest,
        SettingsUpdatedResponse,
    )),
    tags(
        (name = "auth", description = "Admin password check"),
        (name = "students", description = "Roster management"),
        (name = "settings", description = "Display settings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
