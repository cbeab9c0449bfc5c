//! Admin login handler.
//!
//! ```text
//! POST /api/login {"password":"1234"}
//! ```
//!
//! The check is stateless: no session is issued and the admin panel keeps
//! its own logged-in flag.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

const LOGIN_SUCCEEDED_MESSAGE: &str = "로그인 성공";
const EMPTY_PASSWORD_MESSAGE: &str = "비밀번호를 입력해주세요.";

/// Login request body for `POST /api/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    #[schema(example = "로그인 성공")]
    pub message: String,
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyPassword => Error::invalid_request(EMPTY_PASSWORD_MESSAGE)
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Check the admin password.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Password accepted", body = LoginResponse),
        (status = 400, description = "Password missing", body = ErrorSchema),
        (status = 401, description = "Password rejected", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::try_from_password(&payload.password)
        .map_err(map_login_validation_error)?;
    state.login.authenticate(&credentials).await?;
    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        message: LOGIN_SUCCEEDED_MESSAGE.to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::MockLoginService;
    use crate::inbound::http::state::HttpStatePorts;
    use crate::inbound::http::test_utils::{read_json, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;
    use std::sync::Arc;

    fn login_request(body: Value) -> actix_http::Request {
        actix_test::TestRequest::post()
            .uri("/api/login")
            .set_json(body)
            .to_request()
    }

    #[rstest]
    #[actix_web::test]
    async fn accepted_password_reports_success() {
        let app = actix_test::init_service(test_app(HttpState::from(HttpStatePorts::default()))).await;

        let response = actix_test::call_service(&app, login_request(json!({ "password": "admin" }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], LOGIN_SUCCEEDED_MESSAGE);
    }

    #[rstest]
    #[case(json!({ "password": "" }))]
    #[case(json!({}))]
    #[actix_web::test]
    async fn missing_password_is_rejected_before_the_port(#[case] body: Value) {
        let mut login_port = MockLoginService::new();
        login_port.expect_authenticate().times(0);
        let state = HttpState::from(HttpStatePorts {
            login: Arc::new(login_port),
            ..HttpStatePorts::default()
        });
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(&app, login_request(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], EMPTY_PASSWORD_MESSAGE);
        assert_eq!(body["details"]["field"], "password");
    }

    #[rstest]
    #[actix_web::test]
    async fn rejected_password_maps_to_unauthorised() {
        let mut login_port = MockLoginService::new();
        login_port
            .expect_authenticate()
            .withf(|creds| creds.password() == "guess")
            .times(1)
            .return_once(|_| Err(Error::unauthorized("비밀번호가 올바르지 않습니다.")));
        let state = HttpState::from(HttpStatePorts {
            login: Arc::new(login_port),
            ..HttpStatePorts::default()
        });
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(&app, login_request(json!({ "password": "guess" }))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = read_json(response).await;
        assert_eq!(body["code"], "unauthorized");
        assert_eq!(body["error"], "비밀번호가 올바르지 않습니다.");
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_body_is_an_invalid_request() {
        let app = actix_test::init_service(test_app(HttpState::from(HttpStatePorts::default()))).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "invalid_request");
    }
}
