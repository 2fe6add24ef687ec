//! Results card: filter box, connection table, export/copy actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the filtered view of the connection store. The filter box only
//! rewrites the query; the store itself is never touched from here. Export
//! and copy serialize the full store (not the filtered view) and refuse to
//! run on an empty store.

#[cfg(test)]
#[path = "results_table_test.rs"]
mod results_table_test;

use leptos::prelude::*;

use crate::net::types::Connection;
use crate::state::connections::ConnectionsState;
use crate::state::ui::{StatusLevel, UiState};
use crate::util::export::{CSV_EXPORT_FILE_NAME, CSV_MIME_TYPE, to_csv, to_tsv};

/// CSV payload for the export action, or the notice shown when there is
/// nothing to export.
fn csv_export_payload(state: &ConnectionsState) -> Result<String, &'static str> {
    if state.is_empty() {
        return Err("No connections to export");
    }
    Ok(to_csv(state.snapshot()))
}

/// TSV payload for the copy action, or the notice shown when there is
/// nothing to copy.
fn tsv_copy_payload(state: &ConnectionsState) -> Result<String, &'static str> {
    if state.is_empty() {
        return Err("Nothing to copy");
    }
    Ok(to_tsv(state.snapshot()))
}

/// Results card with the connection table and its toolbar.
#[component]
pub fn ResultsTable() -> impl IntoView {
    let connections = expect_context::<RwSignal<ConnectionsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let rows = move || {
        let state = connections.get();
        state.visible().into_iter().cloned().collect::<Vec<Connection>>()
    };
    let shown_count = move || rows().len();

    let on_filter = move |ev| {
        connections.update(|c| c.filter_query = event_target_value(&ev));
    };

    let on_export = move |_| {
        match connections.with_untracked(csv_export_payload) {
            Ok(csv) => {
                crate::util::browser::download_text_file(CSV_EXPORT_FILE_NAME, CSV_MIME_TYPE, &csv);
            }
            Err(notice) => ui.update(|u| u.set_status(StatusLevel::Error, notice)),
        }
    };

    let on_copy = move |_| {
        match connections.with_untracked(tsv_copy_payload) {
            Ok(tsv) => {
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    if crate::util::browser::copy_to_clipboard(&tsv).await {
                        ui.update(|u| u.set_status(StatusLevel::Ok, "Copied to clipboard"));
                    } else {
                        ui.update(|u| u.set_status(StatusLevel::Error, "Copy failed"));
                    }
                });
                #[cfg(not(feature = "csr"))]
                let _ = tsv;
            }
            Err(notice) => ui.update(|u| u.set_status(StatusLevel::Error, notice)),
        }
    };

    view! {
        <div class="card results">
            <div class="results__toolbar">
                <input
                    class="results__filter"
                    type="text"
                    placeholder="Filter connections..."
                    prop:value=move || connections.get().filter_query.clone()
                    on:input=on_filter
                />
                <button class="button button--ghost" on:click=on_copy>"Copy"</button>
                <button class="button button--ghost" on:click=on_export>"Export CSV"</button>
                <span class="results__count">
                    {move || format!("{} connection(s)", shown_count())}
                </span>
            </div>
            {move || {
                let list = rows();
                if list.is_empty() {
                    return view! {
                        <div class="results__empty">"No connections."</div>
                    }
                    .into_any();
                }
                view! {
                    <table class="results__table">
                        <thead>
                            <tr>
                                <th>"From"</th>
                                <th>"To"</th>
                                <th>"Description"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.from}</td>
                                        <td>{row.to}</td>
                                        <td>{row.description}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
