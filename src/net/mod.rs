//! Backend HTTP boundary: request/response DTOs and the fetch gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preview/trace computation lives in an external service; everything in
//! this module exists to speak its JSON contract and normalize outcomes into
//! [`error::ApiError`] for the UI layer.

pub mod api;
pub mod error;
pub mod types;
