mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/healthz").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ok"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_store_unreachable() {
    let server = common::create_unreachable_server();

    let response = server.get("/healthz").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ok"], false);
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_healthz_is_not_treated_as_code() {
    let (server, repo) = common::create_test_server();
    common::seed_link(&repo, "healthz", "https://example.com").await;

    let response = server.get("/healthz").await;

    response.assert_status_ok();
    assert_eq!(repo.snapshot("healthz").unwrap().clicks, 0);
}
