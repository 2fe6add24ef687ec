//! HTTP gateway for the preview and trace endpoints.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a network error, since the endpoints are
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Both calls validate their required fields before touching the network,
//! never retry, and map every outcome onto [`ApiError`] so callers can
//! reduce any failure to a one-line status message. The gateway holds no
//! state between calls.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Connection, PreviewRequest, TraceRequest};
#[cfg(any(test, feature = "csr"))]
use super::types::{PreviewResponse, TraceResponse};

/// Endpoint rendering one page of the PDF as a PNG.
pub const PREVIEW_ENDPOINT: &str = "/api/preview";
/// Endpoint running the wire-trace computation.
pub const TRACE_ENDPOINT: &str = "/api/trace";

/// Checks preview preconditions without touching the network.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the PDF path is blank.
pub fn validate_preview(request: &PreviewRequest) -> Result<(), ApiError> {
    if request.pdf_path.trim().is_empty() {
        return Err(ApiError::Validation("Enter a PDF path or drop a file".to_owned()));
    }
    Ok(())
}

/// Checks trace preconditions. The API key may legitimately be empty; the
/// backend decides whether to apply a default or reject.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the PDF path or either token is blank.
pub fn validate_trace(request: &TraceRequest) -> Result<(), ApiError> {
    if request.pdf_path.trim().is_empty()
        || request.from_token.trim().is_empty()
        || request.to_token.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "PDF path, from and to tokens are required".to_owned(),
        ));
    }
    Ok(())
}

/// Maps a decoded preview response onto the gateway result.
///
/// A `success: true` body without an image is still a backend failure; the
/// caller needs bytes, not a bare flag.
#[cfg(any(test, feature = "csr"))]
fn map_preview_response(http_ok: bool, body: PreviewResponse) -> Result<String, ApiError> {
    if http_ok && body.success {
        if let Some(image) = body.image {
            return Ok(image);
        }
    }
    Err(ApiError::Backend(body.error.unwrap_or_else(|| "Preview failed".to_owned())))
}

/// Maps a decoded trace response onto the gateway result. An empty
/// connection list on success is a legal outcome, not an error.
#[cfg(any(test, feature = "csr"))]
fn map_trace_response(http_ok: bool, body: TraceResponse) -> Result<Vec<Connection>, ApiError> {
    if http_ok && body.success {
        return Ok(body.connections);
    }
    Err(ApiError::Backend(body.error.unwrap_or_else(|| "Trace failed".to_owned())))
}

/// Fetch one rendered page as base64 PNG bytes.
///
/// At-most-once: a failed call is reported, never retried.
///
/// # Errors
///
/// [`ApiError::Validation`] before any network call when the PDF path is
/// blank, [`ApiError::Backend`] when the server reports failure, and
/// [`ApiError::Network`] for transport faults or unparseable bodies.
pub async fn fetch_preview(request: &PreviewRequest) -> Result<String, ApiError> {
    validate_preview(request)?;
    #[cfg(feature = "csr")]
    {
        let response = gloo_net::http::Request::post(PREVIEW_ENDPOINT)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let http_ok = response.ok();
        let body: PreviewResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        map_preview_response(http_ok, body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Run the wire-trace computation and return the connections in backend
/// arrival order (possibly empty).
///
/// # Errors
///
/// Same mapping rules as [`fetch_preview`].
pub async fn fetch_trace(request: &TraceRequest) -> Result<Vec<Connection>, ApiError> {
    validate_trace(request)?;
    #[cfg(feature = "csr")]
    {
        let response = gloo_net::http::Request::post(TRACE_ENDPOINT)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let http_ok = response.ok();
        let body: TraceResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        map_trace_response(http_ok, body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}
