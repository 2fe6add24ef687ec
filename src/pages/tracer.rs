//! Tracer page: single-page layout wiring the form, status banner,
//! preview panel, and results table together.

use leptos::prelude::*;

use crate::components::preview_panel::PreviewPanel;
use crate::components::results_table::ResultsTable;
use crate::components::status_banner::StatusBanner;
use crate::components::trace_form::TraceFormCard;

/// The one page of the application.
#[component]
pub fn TracerPage() -> impl IntoView {
    view! {
        <main class="tracer-page">
            <h1 class="tracer-page__title">"Wire Tracer"</h1>
            <StatusBanner/>
            <TraceFormCard/>
            <PreviewPanel/>
            <ResultsTable/>
        </main>
    }
}
