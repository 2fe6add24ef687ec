//! Browser glue for the export actions: blob download and clipboard write.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the web-sys calls so components hand over plain strings and
//! never touch DOM APIs. Native builds no-op: these actions only exist in a
//! browser.

#![allow(clippy::unused_async)]

/// Trigger a download of `contents` as a file named `file_name`.
///
/// Builds an object URL over an in-memory blob, clicks a detached anchor,
/// then revokes the URL. Best-effort: DOM failures are swallowed, matching
/// the fire-and-forget nature of a download click.
pub fn download_text_file(file_name: &str, mime_type: &str, contents: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(file_name);
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (file_name, mime_type, contents);
    }
}

/// Write `text` to the system clipboard. Resolves `true` once the browser
/// confirms the write, `false` on rejection or outside a browser.
pub async fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}
