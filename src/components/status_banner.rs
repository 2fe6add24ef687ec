//! One-line status banner reflecting the most recent action's outcome.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Status banner shown above the form. Level drives the border color via
/// the `status--*` modifier classes.
#[component]
pub fn StatusBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class=move || ui.get().status_class()>
            <div class="muted">{move || ui.get().status_text.clone()}</div>
        </div>
    }
}
