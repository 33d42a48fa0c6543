//! End-to-end tests for the HTTP transport: drives the real router
//! in-process, no socket involved.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use emoji_cloak::server::routes::router;

fn test_app() -> Router {
    router("static")
}

/// POST a JSON body and return the status plus parsed response body.
async fn post_json(uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_encode_returns_known_artifact() {
    let (status, body) = post_json("/api/encode", r#"{"emoji":"😊","text":"hi"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["encoded"], "😊\u{E0168}\u{E0169}");
}

#[tokio::test]
async fn test_decode_returns_hidden_text() {
    let request = serde_json::json!({ "text": "😊\u{E0168}\u{E0169}" });
    let (status, body) = post_json("/api/decode", &request.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decoded"], "hi");
}

#[tokio::test]
async fn test_api_round_trip_with_trailing_text() {
    let (status, body) =
        post_json("/api/encode", r#"{"emoji":"🎉","text":"secret plans"}"#).await;
    assert_eq!(status, StatusCode::OK);
    let artifact = body["encoded"].as_str().unwrap();

    let request = serde_json::json!({ "text": format!("{} and a caption", artifact) });
    let (status, body) = post_json("/api/decode", &request.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decoded"], "secret plans");
}

#[tokio::test]
async fn test_encode_accepts_generic_field_names() {
    let (status, body) = post_json("/api/encode", r#"{"base":"x","payload":"hi"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["encoded"], "x\u{E0168}\u{E0169}");
}

#[tokio::test]
async fn test_decode_accepts_input_field_name() {
    let request = serde_json::json!({ "input": "x\u{E0168}\u{E0169}" });
    let (status, body) = post_json("/api/decode", &request.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decoded"], "hi");
}

#[tokio::test]
async fn test_encode_defaults_missing_fields_to_empty() {
    let (status, body) = post_json("/api/encode", "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["encoded"], "");
}

#[tokio::test]
async fn test_decode_of_plain_text_is_empty() {
    let (status, body) = post_json("/api/decode", r#"{"text":"nothing hidden here"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decoded"], "");
}

#[tokio::test]
async fn test_get_on_codec_route_is_method_not_allowed() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/encode")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (status, body) = post_json("/api/decode", "this is not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid request body"));
}

#[tokio::test]
async fn test_health_check_reports_ok() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_cors_headers_are_present() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/encode")
                .header(header::ORIGIN, "http://example.com")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"emoji":"😊","text":"hi"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_index_page_is_served_at_root() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/html"));
}
