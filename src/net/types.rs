//! Wire DTOs for the preview and trace endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON payloads field-for-field so serde
//! round-trips stay lossless. Response types default every field: error
//! bodies may omit `success` entirely, and a missing field must read as
//! empty rather than fail the decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single traced wire connection between two labeled points on a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Source label (terminal number or component tag).
    #[serde(default)]
    pub from: String,
    /// Destination label.
    #[serde(default)]
    pub to: String,
    /// Contextual text describing the wire's function (tag + function text).
    #[serde(default)]
    pub description: String,
}

/// Body for `POST /api/preview`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreviewRequest {
    pub pdf_path: String,
    pub page: u32,
}

/// Body for `POST /api/trace`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceRequest {
    pub pdf_path: String,
    pub api_key: String,
    pub page: u32,
    pub model: String,
    pub from_token: String,
    pub to_token: String,
}

/// Response body for `POST /api/preview`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PreviewResponse {
    #[serde(default)]
    pub success: bool,
    /// Rendered page as base64 PNG bytes, present on success.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body for `POST /api/trace`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TraceResponse {
    #[serde(default)]
    pub success: bool,
    /// Traced connections in backend arrival order; empty is a legal
    /// "no connections found" outcome, distinct from an error.
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub error: Option<String>,
}
