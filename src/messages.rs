//! # API Message Types
//!
//! Request and response bodies for the encode/decode HTTP API. Everything on
//! the wire is JSON. Field names follow the frontend contract (`emoji`,
//! `text`); the aliases accept the generic names (`base`, `payload`,
//! `input`) so either shape decodes.
//!
//! Missing request fields default to the empty string, matching the zero
//! values the original handlers produced.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/encode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeRequest {
    /// Visible character(s) the payload hides behind. Any string is
    /// accepted, typically a single emoji or letter.
    #[serde(alias = "base", default)]
    pub emoji: String,
    /// Text whose UTF-8 bytes become the hidden payload.
    #[serde(alias = "payload", default)]
    pub text: String,
}

/// Successful response of `POST /api/encode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeResponse {
    /// The artifact: base character followed by one selector per byte.
    pub encoded: String,
}

/// Body of `POST /api/decode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeRequest {
    /// Text that may carry a hidden payload.
    #[serde(alias = "input", default)]
    pub text: String,
}

/// Successful response of `POST /api/decode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeResponse {
    /// Recovered payload bytes rendered as UTF-8 text. Empty when the input
    /// carried no selectors.
    pub decoded: String,
}

/// Error body shared by every failure response on the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
