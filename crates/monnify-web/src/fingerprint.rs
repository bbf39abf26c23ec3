//! Environment Fingerprint Collection

use monnify_core::BrowserEnvironment;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Snapshot the hosting browser at popup-creation time. Every field
/// degrades to a benign default rather than failing the session.
pub fn collect(window: &Window) -> BrowserEnvironment {
    let navigator = window.navigator();
    let language = navigator.language().unwrap_or_else(|| "en-US".into());
    let user_agent = navigator.user_agent().unwrap_or_default();

    BrowserEnvironment::new(
        language,
        dimension(window.inner_height()),
        dimension(window.inner_width()),
        user_agent,
    )
}

fn dimension(value: Result<JsValue, JsValue>) -> String {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .map_or_else(String::new, |v| (v as u32).to_string())
}
