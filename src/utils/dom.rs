//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlElement, Storage, Url, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Set `document.title`.
pub fn set_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current `location.search`, leading `?` included (or empty).
pub fn get_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Push a new query string onto the history stack.
///
/// The search string should include the `?` prefix.
pub fn push_search(search: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let pathname = window.location().pathname().unwrap_or_default();
        let url = format!("{pathname}{search}");
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

/// Replace the current query string without adding to browser history.
pub fn replace_search(search: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let pathname = window.location().pathname().unwrap_or_default();
        let url = format!("{pathname}{search}");
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

// =============================================================================
// Clipboard, Downloads and Blobs
// =============================================================================

/// Write text to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = window().ok_or("Browser window not available")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(drop)
        .map_err(|e| e.as_string().unwrap_or_else(|| "Clipboard write failed".to_string()))
}

/// Start a browser-native download through a temporary `<a download>`.
pub fn trigger_download(url: &str, filename: &str) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let anchor: HtmlElement = document.create_element("a")?.dyn_into()?;
    anchor.set_attribute("href", url)?;
    anchor.set_attribute("target", "_blank")?;
    let name = if filename.is_empty() { "download" } else { filename };
    anchor.set_attribute("download", name)?;

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

/// Wrap bytes in a `Blob` and open its object URL in a new tab.
///
/// The URL is never revoked; it lives until this page is closed.
pub fn open_blob(bytes: &[u8], content_type: Option<&str>) -> Result<String, JsValue> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    if let Some(content_type) = content_type {
        options.set_type(content_type);
    }
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    window()
        .ok_or_else(|| JsValue::from_str("window not available"))?
        .open_with_url_and_target(&url, "_blank")?;
    Ok(url)
}
