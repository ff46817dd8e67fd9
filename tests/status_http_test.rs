//! Integration tests for the status flag deployment, driven in-process
//! through the axum router.

use aviso::adapters::http::{HttpServerConfig, StatusHttpServer, LIVENESS_MESSAGE};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

fn router() -> Router {
    StatusHttpServer::in_memory(HttpServerConfig::default()).router()
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn status_of(router: &Router, uri: &str) -> bool {
    let (code, content_type, body) = get(router, uri).await;
    assert_eq!(code, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));

    let json: Value = serde_json::from_str(&body).unwrap();
    json["status"].as_bool().expect("status should be a boolean")
}

#[tokio::test]
async fn test_root_returns_liveness_text() {
    let (code, content_type, body) = get(&router(), "/").await;

    assert_eq!(code, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, LIVENESS_MESSAGE);
    assert_eq!(body, "Servidor Flask rodando!");
}

#[tokio::test]
async fn test_initial_status_is_false() {
    let router = router();
    assert!(!status_of(&router, "/aviso").await);
}

#[tokio::test]
async fn test_read_without_param_is_idempotent() {
    let router = router();
    assert!(!status_of(&router, "/aviso").await);
    assert!(!status_of(&router, "/aviso").await);

    assert!(status_of(&router, "/aviso?ativo=true").await);
    assert!(status_of(&router, "/aviso").await);
    assert!(status_of(&router, "/aviso").await);
}

#[tokio::test]
async fn test_activate_then_read() {
    let router = router();
    assert!(status_of(&router, "/aviso?ativo=true").await);
    assert!(status_of(&router, "/aviso").await);
}

#[tokio::test]
async fn test_exact_json_body() {
    let router = router();
    let (_, _, body) = get(&router, "/aviso?ativo=TRUE").await;
    assert_eq!(body, r#"{"status":true}"#);
}

#[tokio::test]
async fn test_uppercase_false_deactivates() {
    let router = router();
    status_of(&router, "/aviso?ativo=true").await;
    assert!(!status_of(&router, "/aviso?ativo=FALSE").await);
    assert!(!status_of(&router, "/aviso").await);
}

#[tokio::test]
async fn test_invalid_token_coerces_to_false() {
    let router = router();
    status_of(&router, "/aviso?ativo=true").await;
    assert!(!status_of(&router, "/aviso?ativo=banana").await);
    assert!(!status_of(&router, "/aviso").await);
}

#[tokio::test]
async fn test_empty_token_coerces_to_false() {
    let router = router();
    status_of(&router, "/aviso?ativo=true").await;
    assert!(!status_of(&router, "/aviso?ativo=").await);
}

#[tokio::test]
async fn test_mixed_case_and_encoded_tokens() {
    let router = router();
    assert!(status_of(&router, "/aviso?ativo=TrUe").await);
    // Percent-encoded "true"
    assert!(status_of(&router, "/aviso?ativo=%74rue").await);
    // Surrounding whitespace is not trimmed
    assert!(!status_of(&router, "/aviso?ativo=%20true").await);
}

#[tokio::test]
async fn test_first_repeated_param_wins() {
    let router = router();
    assert!(status_of(&router, "/aviso?ativo=true&ativo=false").await);
    assert!(!status_of(&router, "/aviso?ativo=false&ativo=true").await);
}

#[tokio::test]
async fn test_unrelated_params_do_not_write() {
    let router = router();
    status_of(&router, "/aviso?ativo=true").await;
    assert!(status_of(&router, "/aviso?mensagem=hello").await);
}

#[tokio::test]
async fn test_deployments_do_not_share_state() {
    let first = router();
    let second = router();

    status_of(&first, "/aviso?ativo=true").await;
    assert!(!status_of(&second, "/aviso").await);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (code, _, _) = get(&router(), "/nope").await;
    assert_eq!(code, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_service_handle_sees_http_writes() {
    let server = StatusHttpServer::in_memory(HttpServerConfig::default());
    let router = server.router();

    status_of(&router, "/aviso?ativo=true").await;
    assert!(server.service().current().is_active());
}

async fn allow_origin_header(enable_cors: bool) -> (StatusCode, Option<String>) {
    let config = HttpServerConfig {
        enable_cors,
        ..Default::default()
    };
    let response = StatusHttpServer::in_memory(config)
        .router()
        .oneshot(
            Request::builder()
                .uri("/aviso?ativo=true")
                .header(header::ORIGIN, "http://sensor.local")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|v| v.to_str().unwrap().to_string());
    (response.status(), allow_origin)
}

#[tokio::test]
async fn test_cors_enabled_allows_any_origin() {
    let (code, allow_origin) = allow_origin_header(true).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(allow_origin.as_deref(), Some("*"));
}

#[tokio::test]
async fn test_cors_disabled_sends_no_allow_origin() {
    let (code, allow_origin) = allow_origin_header(false).await;
    assert_eq!(code, StatusCode::OK);
    assert!(allow_origin.is_none());
}

#[tokio::test]
async fn test_malformed_tokens_coerce_to_false() {
    let router = router();
    for uri in [
        "/aviso?ativo=%FF",
        "/aviso?ativo=%",
        "/aviso?ativo",
        "/aviso?&&ativo=x",
        "/aviso?ativo=%E2%82",
    ] {
        status_of(&router, "/aviso?ativo=true").await;
        assert!(!status_of(&router, uri).await, "{uri} should deactivate");
    }
}
