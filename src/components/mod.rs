//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the tracer chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers. Handler
//! logic that does not need a DOM lives in plain functions alongside each
//! component so it stays natively testable.

pub mod preview_panel;
pub mod results_table;
pub mod status_banner;
pub mod trace_form;
