//! Display API integration tests.
//!
//! Run with: `cargo test -p docintake-api --test display_test`

mod helpers;

use axum::http::StatusCode;
use helpers::setup_test_app;
use serde_json::{json, Value};

#[tokio::test]
async fn test_display_echoes_payload() {
    let app = setup_test_app();
    let payload = json!({
        "fullName": "Ada Lovelace",
        "age": "34 years, 9 months",
        "extractedText": "Notes on the Analytical Engine"
    });

    let response = app.client().post("/display").json(&payload).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), payload);
}

#[tokio::test]
async fn test_display_accepts_empty_age() {
    let app = setup_test_app();
    let payload = json!({
        "fullName": "Ada Lovelace",
        "age": "",
        "extractedText": "text"
    });

    let response = app.client().post("/display").json(&payload).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["age"], "");
}

#[tokio::test]
async fn test_display_echoes_non_string_age() {
    let app = setup_test_app();

    for age in [json!(5), Value::Null] {
        let payload = json!({
            "fullName": "Ada Lovelace",
            "age": age,
            "extractedText": "text"
        });

        let response = app.client().post("/display").json(&payload).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), payload);
    }
}

#[tokio::test]
async fn test_display_rejects_incomplete_payloads() {
    let app = setup_test_app();
    let cases = [
        json!({ "age": "1 years, 0 months", "extractedText": "text" }),
        json!({ "fullName": "", "age": "1 years, 0 months", "extractedText": "text" }),
        json!({ "fullName": "Ada Lovelace", "extractedText": "text" }),
        json!({ "fullName": "Ada Lovelace", "age": "1 years, 0 months" }),
        json!({ "fullName": "Ada Lovelace", "age": "1 years, 0 months", "extractedText": "" }),
    ];

    for payload in cases {
        let response = app.client().post("/display").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["error"],
            "Need fullName, age, and extractedText to proceed.",
            "payload {}",
            payload
        );
    }
}

#[tokio::test]
async fn test_display_rejects_malformed_json() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/display")
        .text("{\"fullName\": ")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_INPUT");
}
