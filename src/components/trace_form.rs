//! Trace form card: inputs, preview/trace submission, and the Clear action.
//!
//! SYSTEM CONTEXT
//! ==============
//! This component drives both request/response cycles. Each cycle validates
//! first (no pending state on a validation failure), then moves its request
//! slot to pending, disables its trigger, and applies the outcome when the
//! spawned task resolves. Outcome application is factored into plain
//! functions so the success/failure transitions are testable natively.

#[cfg(test)]
#[path = "trace_form_test.rs"]
mod trace_form_test;

use leptos::prelude::*;

use crate::net::api;
#[cfg(any(test, feature = "csr"))]
use crate::net::error::ApiError;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::Connection;
use crate::state::connections::ConnectionsState;
use crate::state::form::{MODEL_CHOICES, TraceForm};
use crate::state::request::RequestSlots;
use crate::state::ui::{StatusLevel, UiState};

/// Banner text for a finished trace; the count includes zero.
#[cfg(any(test, feature = "csr"))]
fn trace_success_message(count: usize) -> String {
    format!("Found {count} connection(s)")
}

/// Applies a finished preview call to the UI state. A failure leaves any
/// previously loaded image in place; preview is best-effort.
#[cfg(any(test, feature = "csr"))]
fn apply_preview_outcome(ui: &mut UiState, outcome: Result<String, ApiError>) {
    match outcome {
        Ok(image) => {
            ui.preview_image = Some(image);
            ui.set_status(StatusLevel::Ok, "Preview loaded");
        }
        Err(err) => ui.set_status(StatusLevel::Error, err.to_string()),
    }
}

/// Reduces a finished trace call to the store mutation plus banner update.
/// Success installs the new list wholesale; failure clears the store so
/// stale rows never outlive the attempt.
#[cfg(any(test, feature = "csr"))]
fn apply_trace_outcome(
    connections: &mut ConnectionsState,
    outcome: Result<Vec<Connection>, ApiError>,
) -> (StatusLevel, String) {
    match outcome {
        Ok(list) => {
            let message = trace_success_message(list.len());
            connections.replace(list);
            (StatusLevel::Ok, message)
        }
        Err(err) => {
            connections.clear();
            (StatusLevel::Error, err.to_string())
        }
    }
}

/// Form card with the PDF/token inputs and the three actions.
#[component]
pub fn TraceFormCard() -> impl IntoView {
    let connections = expect_context::<RwSignal<ConnectionsState>>();
    let form = expect_context::<RwSignal<TraceForm>>();
    let requests = expect_context::<RwSignal<RequestSlots>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_preview = move |_| {
        let request = form.with_untracked(TraceForm::preview_request);
        if let Err(err) = api::validate_preview(&request) {
            ui.update(|u| u.set_status(StatusLevel::Error, err.to_string()));
            return;
        }
        if !requests.try_update(|r| r.preview.begin()).unwrap_or(false) {
            return;
        }
        ui.update(|u| u.set_status(StatusLevel::Loading, "Loading page preview..."));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = api::fetch_preview(&request).await;
            if let Err(err) = &outcome {
                log::warn!("preview failed: {err}");
            }
            ui.update(|u| apply_preview_outcome(u, outcome));
            requests.update(|r| r.preview.finish());
        });
        #[cfg(not(feature = "csr"))]
        requests.update(|r| r.preview.finish());
    };

    let on_trace = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = form.with_untracked(TraceForm::trace_request);
        if let Err(err) = api::validate_trace(&request) {
            ui.update(|u| u.set_status(StatusLevel::Error, err.to_string()));
            return;
        }
        if !requests.try_update(|r| r.trace.begin()).unwrap_or(false) {
            return;
        }
        ui.update(|u| u.set_status(StatusLevel::Loading, "Processing..."));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = api::fetch_trace(&request).await;
            if let Err(err) = &outcome {
                log::warn!("trace failed: {err}");
            }
            if let Some((level, message)) =
                connections.try_update(|c| apply_trace_outcome(c, outcome))
            {
                ui.update(|u| u.set_status(level, message));
            }
            requests.update(|r| r.trace.finish());
        });
        #[cfg(not(feature = "csr"))]
        requests.update(|r| r.trace.finish());
    };

    let on_clear = move |_| {
        form.update(TraceForm::reset);
        connections.update(|c| {
            c.clear();
            c.filter_query.clear();
        });
        ui.update(|u| {
            u.preview_image = None;
            u.set_status(StatusLevel::Idle, "Idle");
        });
    };

    view! {
        <form class="card trace-form" on:submit=on_trace>
            <div class="trace-form__grid">
                <div class="trace-form__field trace-form__field--wide">
                    <label class="trace-form__label">"PDF path"</label>
                    <input
                        class="trace-form__input"
                        type="text"
                        placeholder="/path/to/schematic.pdf"
                        prop:value=move || form.get().pdf_path.clone()
                        on:input=move |ev| form.update(|f| f.pdf_path = event_target_value(&ev))
                    />
                </div>
                <div class="trace-form__field">
                    <label class="trace-form__label">"API key"</label>
                    <input
                        class="trace-form__input"
                        type="password"
                        prop:value=move || form.get().api_key.clone()
                        on:input=move |ev| form.update(|f| f.api_key = event_target_value(&ev))
                    />
                </div>
                <div class="trace-form__field">
                    <label class="trace-form__label">"Page"</label>
                    <input
                        class="trace-form__input"
                        type="number"
                        min="1"
                        prop:value=move || form.get().page.clone()
                        on:input=move |ev| form.update(|f| f.page = event_target_value(&ev))
                    />
                </div>
                <div class="trace-form__field">
                    <label class="trace-form__label">"Model"</label>
                    <select
                        class="trace-form__select"
                        prop:value=move || form.get().model.clone()
                        on:change=move |ev| form.update(|f| f.model = event_target_value(&ev))
                    >
                        {MODEL_CHOICES
                            .iter()
                            .map(|choice| {
                                let choice = *choice;
                                view! { <option value=choice>{choice}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="trace-form__field">
                    <label class="trace-form__label">"From token"</label>
                    <input
                        class="trace-form__input"
                        type="text"
                        placeholder="X1"
                        prop:value=move || form.get().from_token.clone()
                        on:input=move |ev| form.update(|f| f.from_token = event_target_value(&ev))
                    />
                </div>
                <div class="trace-form__field">
                    <label class="trace-form__label">"To token"</label>
                    <input
                        class="trace-form__input"
                        type="text"
                        placeholder="K2"
                        prop:value=move || form.get().to_token.clone()
                        on:input=move |ev| form.update(|f| f.to_token = event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="trace-form__actions">
                <button
                    class="button button--ghost"
                    type="button"
                    disabled=move || requests.get().preview.is_pending()
                    on:click=on_preview
                >
                    "Preview page"
                </button>
                <button
                    class="button"
                    type="submit"
                    disabled=move || requests.get().trace.is_pending()
                >
                    "Trace wires"
                </button>
                <button class="button button--ghost" type="button" on:click=on_clear>
                    "Clear"
                </button>
            </div>
        </form>
    }
}
