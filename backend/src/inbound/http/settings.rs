//! Display settings handlers.
//!
//! ```text
//! GET /api/settings
//! PUT /api/settings {"scrollSpeed":300,"mobileFontSize":1.25}
//! ```

use actix_web::{HttpResponse, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::SettingsUpdated;
use crate::domain::{DisplaySettings, SettingsPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DisplaySettingsSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Partial update body for `PUT /api/settings`.
///
/// Absent or `null` fields keep their stored values.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRequest {
    #[serde(default)]
    #[schema(example = 300)]
    pub scroll_speed: Option<f64>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub students_per_row: Option<f64>,
    #[serde(default)]
    pub mobile_scroll_speed: Option<f64>,
    #[serde(default)]
    pub mobile_font_size: Option<f64>,
    #[serde(default)]
    pub mobile_students_per_row: Option<f64>,
}

impl From<SettingsRequest> for SettingsPatch {
    fn from(value: SettingsRequest) -> Self {
        Self {
            scroll_speed: value.scroll_speed,
            font_size: value.font_size,
            students_per_row: value.students_per_row,
            mobile_scroll_speed: value.mobile_scroll_speed,
            mobile_font_size: value.mobile_font_size,
            mobile_students_per_row: value.mobile_students_per_row,
        }
    }
}

/// Response body for a successful update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SettingsUpdatedResponse {
    pub success: bool,
    #[schema(example = "설정이 업데이트되었습니다.")]
    pub message: String,
    #[schema(value_type = DisplaySettingsSchema)]
    pub settings: DisplaySettings,
}

impl From<SettingsUpdated> for SettingsUpdatedResponse {
    fn from(value: SettingsUpdated) -> Self {
        Self {
            success: true,
            message: value.message,
            settings: value.settings,
        }
    }
}

/// Fetch the display settings, storing defaults on first use.
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (
            status = 200,
            description = "Display settings",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = DisplaySettingsSchema
        ),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["settings"],
    operation_id = "getSettings"
)]
#[get("/settings")]
pub async fn get_settings(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let settings = state.settings_query.fetch_settings().await?;
    Ok(HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-cache"))
        .json(settings))
}

/// Merge the present fields into the stored settings.
#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = SettingsRequest,
    responses(
        (status = 200, description = "Settings updated", body = SettingsUpdatedResponse),
        (status = 400, description = "A field is out of range", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["settings"],
    operation_id = "updateSettings"
)]
#[put("/settings")]
pub async fn update_settings(
    state: web::Data<HttpState>,
    payload: web::Json<SettingsRequest>,
) -> ApiResult<web::Json<SettingsUpdatedResponse>> {
    let updated = state
        .settings
        .update_settings(payload.into_inner().into())
        .await?;
    Ok(web::Json(updated.into()))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::MockSettingsCommand;
    use crate::inbound::http::state::HttpStatePorts;
    use crate::inbound::http::test_utils::{read_json, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn put_settings(body: Value) -> actix_http::Request {
        actix_test::TestRequest::put()
            .uri("/api/settings")
            .set_json(body)
            .to_request()
    }

    #[rstest]
    #[actix_web::test]
    async fn get_returns_the_bare_settings_document() {
        let app = actix_test::init_service(test_app(HttpState::from(HttpStatePorts::default()))).await;

        let request = actix_test::TestRequest::get().uri("/api/settings").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({
                "scrollSpeed": 600,
                "fontSize": 2.0,
                "studentsPerRow": 7,
                "mobileScrollSpeed": 900,
                "mobileFontSize": 1.5,
                "mobileStudentsPerRow": 3,
            })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn put_forwards_only_present_fields() {
        let mut command = MockSettingsCommand::new();
        command
            .expect_update_settings()
            .withf(|patch| {
                *patch
                    == SettingsPatch {
                        scroll_speed: Some(300.0),
                        ..SettingsPatch::default()
                    }
            })
            .times(1)
            .return_once(|_| {
                Ok(SettingsUpdated {
                    message: "설정이 업데이트되었습니다.".to_owned(),
                    settings: DisplaySettings {
                        scroll_speed: 300,
                        ..DisplaySettings::default()
                    },
                })
            });
        let state = HttpState::from(HttpStatePorts {
            settings: Arc::new(command),
            ..HttpStatePorts::default()
        });
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(
            &app,
            put_settings(json!({ "scrollSpeed": 300, "fontSize": null })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "설정이 업데이트되었습니다.");
        assert_eq!(body["settings"]["scrollSpeed"], 300);
        assert_eq!(body["settings"]["fontSize"], 2.0);
    }

    #[rstest]
    #[case(json!({ "scrollSpeed": 29 }), "scrollSpeed")]
    #[case(json!({ "fontSize": 5.5 }), "fontSize")]
    #[case(json!({ "mobileStudentsPerRow": 7 }), "mobileStudentsPerRow")]
    #[case(json!({ "studentsPerRow": 2.5 }), "studentsPerRow")]
    #[actix_web::test]
    async fn put_rejects_out_of_range_fields(#[case] body: Value, #[case] field: &str) {
        let app = actix_test::init_service(test_app(HttpState::from(HttpStatePorts::default()))).await;

        let response = actix_test::call_service(&app, put_settings(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], field);
    }

    #[rstest]
    #[actix_web::test]
    async fn put_with_non_numeric_field_is_invalid() {
        let app = actix_test::init_service(test_app(HttpState::from(HttpStatePorts::default()))).await;

        let response =
            actix_test::call_service(&app, put_settings(json!({ "fontSize": "big" }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
