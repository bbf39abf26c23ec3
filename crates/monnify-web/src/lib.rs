//! # monnify-web
//!
//! Browser-embeddable Monnify checkout popup. Injects the overlay and
//! checkout iframe into the hosting document, initializes the remote
//! session and relays the hosted app's lifecycle messages back to the
//! caller as normalized responses.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use monnify_web::{initialize, EventHandlers, PaymentConfig};
//!
//! let config = PaymentConfig {
//!     api_key: "MK_TEST_1".into(),
//!     contract_code: "C1".into(),
//!     amount: 100.into(),
//!     currency: "NGN".into(),
//!     customer_email: "a@b.com".into(),
//!     payment_description: "Order #77".into(),
//!     ..Default::default()
//! };
//!
//! let handlers = EventHandlers::new()
//!     .on_complete(|response| tracing::info!(status = response.status.as_str(), "paid"))
//!     .on_close(|_| tracing::info!("popup closed"));
//!
//! let session = initialize(config, handlers)?;
//! # Ok::<(), monnify_web::SdkError>(())
//! ```
//!
//! JavaScript callers get the same surface through the exported
//! `initialize(config)` function with `onClose`/`onComplete`/
//! `onLoadStart`/`onLoadComplete` callback properties.

mod api;
mod dom;
mod fingerprint;
mod handlers;
mod interop;
mod session;
mod styles;

pub use dom::{build_popup, remove_popup, PopupElements, WRAPPER_ID};
pub use handlers::EventHandlers;
pub use session::{initialize, initialize_with_options, PopupSession, SessionOptions};
pub use styles::{ensure_styles_injected, STYLE_ID};

// Core types integrators interact with directly
pub use monnify_core::{
    Disposition, Endpoints, Environment, Lifecycle, LifecycleState, PaymentConfig, PaymentResponse,
    SdkError, TransactionStatus, ValidationError,
};

use wasm_bindgen::prelude::*;

pub(crate) fn browser_window() -> Result<web_sys::Window, SdkError> {
    web_sys::window().ok_or_else(|| SdkError::Dom("no window in this context".into()))
}

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}
