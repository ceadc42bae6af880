//! Startup tests: port fallback and the OpenAPI document.
//!
//! Run with: `cargo test -p docintake-api --test server_test`

mod helpers;

use docintake_api::setup::server::bind_with_fallback;
use helpers::setup_test_app;
use serde_json::Value;

#[tokio::test]
async fn test_bind_ephemeral_port_reports_actual_port() {
    let (listener, port) = bind_with_fallback("127.0.0.1", 0, 0).await.unwrap();
    assert_ne!(port, 0);
    assert_eq!(listener.local_addr().unwrap().port(), port);
}

#[tokio::test]
async fn test_bind_falls_back_when_port_in_use() {
    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let taken = occupied.local_addr().unwrap().port();

    let (listener, port) = bind_with_fallback("127.0.0.1", taken, 10).await.unwrap();

    assert_ne!(port, taken);
    assert!(port > taken && port <= taken.saturating_add(10));
    assert_eq!(listener.local_addr().unwrap().port(), port);
}

#[tokio::test]
async fn test_bind_gives_up_after_attempts() {
    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let taken = occupied.local_addr().unwrap().port();

    let result = bind_with_fallback("127.0.0.1", taken, 0).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let app = setup_test_app();

    let response = app.client().get("/api/openapi.json").await;

    response.assert_status_ok();
    let doc: Value = response.json();
    assert!(doc["paths"].get("/api/upload").is_some());
    assert!(doc["paths"].get("/display").is_some());
}
