//! JS Boundary
//!
//! Mirrors the hosted SDK's `initialize(config)` surface for plain
//! JavaScript callers: callbacks ride on the config object, validation
//! failures land on the console and outcomes are plain camelCase
//! objects.

use js_sys::{Object, Reflect};
use monnify_core::{PaymentConfig, ValidationError};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::handlers::{EventHandlers, CALLBACK_PROPS};
use crate::session;

/// Serialize for the JS side: plain objects, not `Map`s
pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Validation failures and session conflicts are reported here rather
/// than thrown; the original surface never raises into the caller.
fn report(reason: &str) {
    web_sys::console::error_1(&JsValue::from_str(reason));
}

/// JS-facing entry point: `initialize(config)`.
///
/// All outcomes are delivered through the config's callback
/// properties; an invalid config produces a console diagnostic and no
/// popup, and nothing here is fatal to the hosting page.
#[wasm_bindgen(js_name = initialize)]
pub fn initialize(config: JsValue) {
    if config.is_null() || config.is_undefined() || !config.is_object() {
        report(&ValidationError::InvalidPayload.to_string());
        return;
    }

    let handlers = EventHandlers::from_js(&config);

    // Shallow-copy the config and drop the function-valued properties
    // before deserializing the data fields.
    let data_only = Object::assign(&Object::new(), config.unchecked_ref());
    for name in CALLBACK_PROPS {
        let _ = Reflect::delete_property(&data_only, &JsValue::from_str(name));
    }

    let parsed: PaymentConfig = match serde_wasm_bindgen::from_value(data_only.into()) {
        Ok(parsed) => parsed,
        Err(_) => {
            report(&ValidationError::InvalidPayload.to_string());
            return;
        }
    };

    if let Err(error) = session::initialize(parsed, handlers) {
        report(&error.to_string());
    }
}
