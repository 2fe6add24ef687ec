//! Top-level routed pages.

pub mod tracer;
