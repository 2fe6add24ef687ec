//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::tracer::TracerPage;
use crate::state::connections::ConnectionsState;
use crate::state::form::TraceForm;
use crate::state::request::RequestSlots;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let connections = RwSignal::new(ConnectionsState::default());
    let form = RwSignal::new(TraceForm::default());
    let requests = RwSignal::new(RequestSlots::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(connections);
    provide_context(form);
    provide_context(requests);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/wiretrace.css"/>
        <Title text="Wire Tracer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TracerPage/>
            </Routes>
        </Router>
    }
}
