//! Popup DOM Construction
//!
//! The fixed element identifiers below are shared with the hosted
//! checkout app's styling and must be preserved verbatim.

use monnify_core::SdkError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlIFrameElement};

/// Fixed id of the overlay wrapper; at most one exists at a time
pub const WRAPPER_ID: &str = "monnify_app_wrapper";

const WRAPPER_CLASS: &str = "monnify-wrapper";
const FRAME_CLASS: &str = "monnify-frame";
const PRELOADER_ID: &str = "MonnifyPreLoader";

/// Permissions the hosted checkout needs inside the frame
const FRAME_PERMISSIONS: &str = "geolocation;clipboard-write";

/// Overlay, frame and optional preloader for one popup session
pub struct PopupElements {
    pub wrapper: Element,
    pub iframe: HtmlIFrameElement,
    pub preloader: Option<Element>,
}

pub(crate) fn js_error(context: &str, error: &JsValue) -> SdkError {
    SdkError::Dom(format!("{context}: {error:?}"))
}

fn create(document: &Document, tag: &str) -> Result<Element, SdkError> {
    document
        .create_element(tag)
        .map_err(|error| js_error("create element", &error))
}

/// Build the full-viewport overlay with the embedded checkout frame
/// and, when the loading flag is set, the spinner preloader. Nothing
/// is attached to the document yet.
pub fn build_popup(document: &Document, show_loading_state: bool) -> Result<PopupElements, SdkError> {
    let wrapper = create(document, "div")?;
    wrapper.set_id(WRAPPER_ID);
    wrapper.set_class_name(WRAPPER_CLASS);

    let iframe: HtmlIFrameElement = create(document, "iframe")?
        .dyn_into()
        .map_err(|_| SdkError::Dom("iframe element has unexpected type".into()))?;
    iframe.set_class_name(FRAME_CLASS);
    for (name, value) in [
        ("width", "100%"),
        ("height", "100%"),
        ("allow", FRAME_PERMISSIONS),
        ("style", "border:0px !important;"),
    ] {
        iframe
            .set_attribute(name, value)
            .map_err(|error| js_error("set frame attribute", &error))?;
    }

    let preloader = if show_loading_state {
        let preloader = build_preloader(document)?;
        wrapper
            .append_child(&preloader)
            .map_err(|error| js_error("attach preloader", &error))?;
        Some(preloader)
    } else {
        None
    };

    wrapper
        .append_child(&iframe)
        .map_err(|error| js_error("attach frame", &error))?;

    Ok(PopupElements {
        wrapper,
        iframe,
        preloader,
    })
}

fn build_preloader(document: &Document) -> Result<Element, SdkError> {
    let preloader = create(document, "div")?;
    preloader.set_id(PRELOADER_ID);
    preloader.set_class_name("show");

    let spinner = create(document, "div")?;
    spinner.set_class_name("lds-spinner");
    for _ in 0..12 {
        spinner
            .append_child(&create(document, "div")?)
            .map_err(|error| js_error("attach spinner segment", &error))?;
    }

    preloader
        .append_child(&spinner)
        .map_err(|error| js_error("attach spinner", &error))?;
    Ok(preloader)
}

/// Remove the overlay by its fixed id. A missing element is a no-op,
/// so terminal-state cleanup stays idempotent.
pub fn remove_popup(document: &Document) {
    if let Some(element) = document.get_element_by_id(WRAPPER_ID) {
        element.remove();
    }
}
