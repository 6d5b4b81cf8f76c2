use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use wallet_dashboard::config::Config;
use wallet_dashboard::{app, AppState};

fn test_state() -> AppState {
    let config = Config {
        rpc_host: "127.0.0.1".into(),
        // Nothing listens here in the test environment; RPC-backed routes
        // are expected to surface a 502, not panic or hang.
        rpc_port: 1,
        rpc_user: String::new(),
        rpc_password: String::new(),
        rpc_cookie: std::path::PathBuf::from("/nonexistent"),
        dashboard_port: 0,
        wallet_name: "default".into(),
        static_dir: std::env::temp_dir(),
    };
    AppState::new(config)
}

#[tokio::test]
async fn generate_with_empty_body_returns_ok() {
    let router = app(test_state());
    let request = Request::builder()
        .method("POST")
        .uri("/api/wallet/generate")
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn generate_with_invalid_entropy_bits_returns_bad_request() {
    let router = app(test_state());
    let request = Request::builder()
        .method("POST")
        .uri("/api/wallet/generate")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"entropy_bits": 200}"#))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generate_with_malformed_path_returns_bad_request() {
    let router = app(test_state());
    let request = Request::builder()
        .method("POST")
        .uri("/api/wallet/generate")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"path": "m/84h/1x/0h"}"#))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn newaddress_surfaces_upstream_failure_as_bad_gateway() {
    let router = app(test_state());
    let request = Request::builder()
        .method("GET")
        .uri("/api/wallet/newaddress")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn rpc_passthrough_surfaces_upstream_failure_as_bad_gateway() {
    let router = app(test_state());
    let request = Request::builder()
        .method("POST")
        .uri("/api/rpc/getblockchaininfo")
        .header("content-type", "application/json")
        .body(Body::from("[]"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unknown_static_path_returns_not_found() {
    let router = app(test_state());
    let request = Request::builder()
        .method("GET")
        .uri("/does-not-exist.html")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
