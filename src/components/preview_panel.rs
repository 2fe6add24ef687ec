//! Page preview card with zoom controls.
//!
//! Shown only while a preview image is loaded. Zoom is a CSS transform on
//! the image; it never re-requests the page.

#[cfg(test)]
#[path = "preview_panel_test.rs"]
mod preview_panel_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Data URI for an image returned by the preview endpoint.
fn preview_data_uri(base64_png: &str) -> String {
    format!("data:image/png;base64,{base64_png}")
}

/// Inline style applying the current zoom factor.
fn zoom_transform_style(zoom: f64) -> String {
    format!("transform: scale({zoom})")
}

/// Preview card: image viewport plus zoom in/out buttons.
#[component]
pub fn PreviewPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let has_image = move || ui.get().preview_image.is_some();
    let image_src = move || {
        ui.get()
            .preview_image
            .as_deref()
            .map(preview_data_uri)
            .unwrap_or_default()
    };
    let image_style = move || zoom_transform_style(ui.get().zoom);

    view! {
        <Show when=has_image>
            <div class="card preview-card">
                <div class="preview-card__zoom">
                    <button
                        class="button button--ghost"
                        on:click=move |_| ui.update(|u| u.zoom_in())
                    >
                        "+"
                    </button>
                    <button
                        class="button button--ghost"
                        on:click=move |_| ui.update(|u| u.zoom_out())
                    >
                        "-"
                    </button>
                </div>
                <div class="preview-card__viewport">
                    <img class="preview-card__image" src=image_src style=image_style/>
                </div>
            </div>
        </Show>
    }
}
