//! Caller Callbacks
//!
//! The four optional lifecycle callbacks a merchant page supplies.
//! From Rust they are plain closures; at the JS boundary they are
//! extracted from the config object's function-valued properties.

use js_sys::{Function, Reflect};
use monnify_core::PaymentResponse;
use wasm_bindgen::{JsCast, JsValue};

use crate::interop::to_js;

/// Config property names holding callbacks at the JS boundary
pub(crate) const CALLBACK_PROPS: [&str; 4] =
    ["onClose", "onComplete", "onLoadStart", "onLoadComplete"];

pub type ResponseCallback = Box<dyn Fn(&PaymentResponse)>;
pub type LifecycleCallback = Box<dyn Fn()>;

/// Optional lifecycle callbacks for one popup session
#[derive(Default)]
pub struct EventHandlers {
    on_close: Option<ResponseCallback>,
    on_complete: Option<ResponseCallback>,
    on_load_start: Option<LifecycleCallback>,
    on_load_complete: Option<LifecycleCallback>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoked on every terminal outcome, including cancellation
    pub fn on_close(mut self, callback: impl Fn(&PaymentResponse) + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Invoked when the transaction finishes, before the close callback
    pub fn on_complete(mut self, callback: impl Fn(&PaymentResponse) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Invoked when popup construction begins
    pub fn on_load_start(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_load_start = Some(Box::new(callback));
        self
    }

    /// Invoked when the checkout frame fires its load event
    pub fn on_load_complete(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_load_complete = Some(Box::new(callback));
        self
    }

    pub(crate) fn close(&self, response: &PaymentResponse) {
        if let Some(callback) = &self.on_close {
            callback(response);
        }
    }

    pub(crate) fn complete(&self, response: &PaymentResponse) {
        if let Some(callback) = &self.on_complete {
            callback(response);
        }
    }

    pub(crate) fn load_start(&self) {
        if let Some(callback) = &self.on_load_start {
            callback();
        }
    }

    pub(crate) fn load_complete(&self) {
        if let Some(callback) = &self.on_load_complete {
            callback();
        }
    }

    /// Extract the callback properties from a JS config object
    pub(crate) fn from_js(config: &JsValue) -> Self {
        let mut handlers = Self::new();
        if let Some(function) = js_function(config, "onClose") {
            handlers = handlers.on_close(js_response_callback(function));
        }
        if let Some(function) = js_function(config, "onComplete") {
            handlers = handlers.on_complete(js_response_callback(function));
        }
        if let Some(function) = js_function(config, "onLoadStart") {
            handlers = handlers.on_load_start(js_void_callback(function));
        }
        if let Some(function) = js_function(config, "onLoadComplete") {
            handlers = handlers.on_load_complete(js_void_callback(function));
        }
        handlers
    }
}

fn js_function(config: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(config, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn js_response_callback(function: Function) -> impl Fn(&PaymentResponse) + 'static {
    move |response| {
        let payload = to_js(response).unwrap_or(JsValue::NULL);
        if let Err(error) = function.call1(&JsValue::NULL, &payload) {
            web_sys::console::error_1(&error);
        }
    }
}

fn js_void_callback(function: Function) -> impl Fn() + 'static {
    move || {
        if let Err(error) = function.call0(&JsValue::NULL) {
            web_sys::console::error_1(&error);
        }
    }
}
