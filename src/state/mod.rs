//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`connections`, `form`, `request`, `ui`) so
//! individual components can depend on small focused models. Each struct is
//! plain Rust, provided to the tree as an `RwSignal` context from `app.rs`,
//! and testable without a browser.

pub mod connections;
pub mod form;
pub mod request;
pub mod ui;
