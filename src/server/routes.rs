//! # HTTP Transport
//!
//! Adapts the codec to request/response I/O: JSON routes for encode and
//! decode, a health probe, permissive CORS, and the static frontend served
//! for every path the API does not claim.
//!
//! The handlers hold no shared state and the codec calls cannot fail, so the
//! only error responses produced here are transport ones: `405` for a wrong
//! method on a codec route and `400` for a body that does not parse.

use axum::{
    extract::rejection::JsonRejection,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use log::{info, warn};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::messages::{
    DecodeRequest, DecodeResponse, EncodeRequest, EncodeResponse, ErrorResponse,
};
use crate::processing::steganography;

/// Build the application router.
///
/// # Arguments
/// - `static_dir`: Directory holding the frontend assets, served as the
///   fallback so `/` renders the index page
pub fn router(static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(
            "/api/encode",
            post(encode_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/decode",
            post(decode_handler).fallback(method_not_allowed),
        )
        .route("/api/health", get(health_check))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
}

/// `POST /api/encode`: hide the payload text behind the chosen base.
async fn encode_handler(
    body: Result<Json<EncodeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = body.map_err(bad_request)?;
    let request_id = rand::random::<u64>();

    info!(
        "📤 Encode request #{}: {} byte payload behind {:?}",
        request_id,
        request.text.len(),
        request.emoji
    );

    let encoded = steganography::encode(&request.emoji, request.text.as_bytes());
    Ok((StatusCode::OK, Json(EncodeResponse { encoded })))
}

/// `POST /api/decode`: recover whatever payload the input carries.
async fn decode_handler(
    body: Result<Json<DecodeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = body.map_err(bad_request)?;
    let request_id = rand::random::<u64>();

    let decoded = steganography::decode(&request.text);
    info!(
        "📥 Decode request #{}: {} chars in, {} bytes recovered",
        request_id,
        request.text.chars().count(),
        decoded.len()
    );

    // The wire format is JSON text, so recovered bytes that are not valid
    // UTF-8 come back with replacement characters.
    let decoded = String::from_utf8_lossy(&decoded).into_owned();
    Ok((StatusCode::OK, Json(DecodeResponse { decoded })))
}

/// `GET /api/health`: liveness probe.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "emoji-cloak",
        "codec": "variation-selector",
    }))
}

/// Shared fallback for the codec routes: anything but POST gets a JSON 405.
async fn method_not_allowed(method: Method, uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    warn!("🚫 {} {} rejected: only POST is supported", method, uri.path());
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
}

/// Map a body that failed to parse onto the 400 error shape.
fn bad_request(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    warn!("⚠️ Rejected request body: {}", rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: format!("Invalid request body: {}", rejection.body_text()),
        }),
    )
}
