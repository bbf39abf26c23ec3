//! # monnify-core
//!
//! Platform-independent core of the Monnify checkout popup SDK:
//! configuration validation, environment resolution, the
//! cross-document message protocol, response normalization and the
//! popup lifecycle state machine. No DOM and no network access live
//! here; the browser crate (`monnify-web`) owns those.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │ Merchant page │────▶│  Hosted checkout  │────▶│  Callbacks   │
//! │ (initialize)  │     │  (iframe overlay) │     │ (normalized) │
//! └──────────────┘     └──────────────────┘     └──────────────┘
//! ```
//!
//! The merchant page hands a [`PaymentConfig`] to the popup
//! controller. After validation the finalized config plus a browser
//! fingerprint ([`RuntimePaymentData`]) initializes a remote checkout
//! session and is posted into the iframe as an INIT_POPUP message. The
//! hosted app answers with lifecycle messages which the [`Lifecycle`]
//! machine classifies into [`Disposition`]s; terminal dispositions
//! carry a normalized [`PaymentResponse`] for the caller's callbacks.
//!
//! ## Usage
//!
//! ```rust
//! use monnify_core::{Disposition, InboundMessage, Lifecycle, PaymentConfig};
//!
//! let config: PaymentConfig = serde_json::from_str(
//!     r#"{
//!         "amount": 100, "currency": "NGN", "customerEmail": "a@b.com",
//!         "paymentDescription": "x", "contractCode": "C1", "apiKey": "MK_TEST_1"
//!     }"#,
//! )?;
//! config.validate()?;
//!
//! let finalized = config.finalize();
//! let mut lifecycle = Lifecycle::new(finalized.redirect_url.clone());
//! lifecycle.frame_loaded();
//!
//! let message: InboundMessage =
//!     serde_json::from_str(r#"{ "type": "MonnifyPopupClose" }"#)?;
//! match lifecycle.dispatch(&message) {
//!     Disposition::Cancelled(_response) => { /* close callback */ }
//!     Disposition::Completed(_response) => { /* complete then close */ }
//!     Disposition::Ignored => {}
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod env;
mod error;
mod lifecycle;
mod message;
mod reference;
mod response;
mod runtime;

pub use config::PaymentConfig;
pub use env::{Endpoints, Environment, PRODUCTION_KEY_MARKER};
pub use error::{Result, SdkError, ValidationError};
pub use lifecycle::{Disposition, Lifecycle, LifecycleState};
pub use message::{InboundMessage, MessageKind, OutboundMessage};
pub use reference::generate_reference;
pub use response::{PaymentResponse, TransactionStatus, USER_CANCELLED};
pub use runtime::{BrowserEnvironment, RuntimePaymentData};
