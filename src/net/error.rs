//! Gateway error taxonomy shared by both backend calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure modes of a preview or trace call.
///
/// `Validation` is raised before any network traffic. `Backend` means the
/// server answered a well-formed body but reported failure. `Network` covers
/// transport faults and bodies that did not parse.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A required field was empty after trimming.
    #[error("{0}")]
    Validation(String),
    /// The backend answered with `success: false` or without a success flag.
    #[error("{0}")]
    Backend(String),
    /// Transport-level failure or an unparseable response body.
    #[error("Network error: {0}")]
    Network(String),
}
