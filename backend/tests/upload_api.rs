//! Spreadsheet uploads through the HTTP API.
//!
//! Workbook decoding is replaced by a stub so these tests cover the multipart
//! handling, name extraction and roster import against real JSON files.

#[path = "support/roster_app.rs"]
mod roster_app;

use std::sync::Arc;

use actix_web::test::TestRequest;
use rstest::{fixture, rstest};
use serde_json::json;
use tempfile::TempDir;

use roster::domain::{CellValue, TabularRow};
use roster::test_support::multipart::{content_type, form_body};
use roster_app::{StubSpreadsheetReader, call_json, default_state, file_backed_state, init_app};

#[fixture]
fn data_dir() -> TempDir {
    tempfile::tempdir().expect("temp dir")
}

fn row(cells: &[(&str, CellValue)]) -> TabularRow {
    cells
        .iter()
        .map(|(header, value)| ((*header).to_owned(), value.clone()))
        .collect()
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_owned())
}

fn upload(filename: &str, contents: &[u8]) -> actix_http::Request {
    TestRequest::post()
        .uri("/api/students/upload")
        .insert_header(("content-type", content_type()))
        .set_payload(form_body("file", filename, contents))
        .to_request()
}

#[rstest]
#[actix_web::test]
async fn uploaded_names_join_the_roster(data_dir: TempDir) {
    let reader = Arc::new(StubSpreadsheetReader::with_rows(vec![
        row(&[("번호", CellValue::Number(1.0)), ("이름", text(" 김민준 "))]),
        row(&[("번호", CellValue::Number(2.0)), ("이름", text("Lee"))]),
        row(&[("번호", CellValue::Number(3.0))]),
        row(&[("번호", CellValue::Number(4.0)), ("이름", CellValue::Number(42.0))]),
        row(&[("번호", CellValue::Number(5.0)), ("이름", text("Kim"))]),
    ]));
    let app = init_app(file_backed_state(data_dir.path(), reader.clone()).await).await;
    call_json(
        &app,
        TestRequest::post()
            .uri("/api/students")
            .set_json(json!({ "name": "Kim" }))
            .to_request(),
    )
    .await;

    let (status, body) = call_json(&app, upload("명단.XLSX", b"PK\x03\x04")).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "2명이 추가되었습니다.");
    assert_eq!(body["added"], json!(["김민준", "Lee"]));
    assert_eq!(body["duplicates"], json!(["Kim"]));
    assert_eq!(body["totalStudents"], 3);
    assert_eq!(body["students"], json!(["김민준", "Kim", "Lee"]));
    assert_eq!(reader.received(), vec![b"PK\x03\x04".to_vec()]);
}

#[rstest]
#[actix_web::test]
async fn all_duplicate_upload_still_succeeds(data_dir: TempDir) {
    let reader = Arc::new(StubSpreadsheetReader::with_rows(vec![row(&[(
        "name",
        text("Kim"),
    )])]));
    let app = init_app(file_backed_state(data_dir.path(), reader).await).await;
    call_json(
        &app,
        TestRequest::post()
            .uri("/api/students")
            .set_json(json!({ "name": "Kim" }))
            .to_request(),
    )
    .await;

    let (status, body) = call_json(&app, upload("names.xls", b"\xD0\xCF")).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "0명이 추가되었습니다.");
    assert_eq!(body["added"], json!([]));
    assert_eq!(body["duplicates"], json!(["Kim"]));
}

#[rstest]
#[actix_web::test]
async fn missing_name_column_leaves_roster_untouched(data_dir: TempDir) {
    let reader = Arc::new(StubSpreadsheetReader::with_rows(vec![row(&[(
        "학번",
        text("2024001"),
    )])]));
    let app = init_app(file_backed_state(data_dir.path(), reader).await).await;

    let (status, body) = call_json(&app, upload("names.xlsx", b"PK")).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "엑셀 파일에서 \"이름\" 열을 찾을 수 없습니다.");

    let (_, body) = call_json(&app, TestRequest::get().uri("/api/students").to_request()).await;
    assert_eq!(body["students"], json!([]));
}

#[rstest]
#[actix_web::test]
async fn garbage_workbook_is_a_server_error(data_dir: TempDir) {
    let app = init_app(default_state(data_dir.path()).await).await;

    let (status, body) = call_json(&app, upload("names.xlsx", b"not a workbook")).await;
    assert_eq!(status, 500);
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["error"], "파일 처리 중 오류가 발생했습니다.");
    assert!(body["traceId"].is_string());
}
