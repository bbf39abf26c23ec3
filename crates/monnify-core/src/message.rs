//! Cross-Document Message Protocol
//!
//! Wire contract with the hosted checkout application. The type
//! strings are part of that contract and must not change.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::runtime::RuntimePaymentData;

/// The message kinds exchanged across the document boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// Hosted app asks for the popup to close
    Close,
    /// Hosted app signals transaction completion UI finished
    Complete,
    /// Hosted app finished loading
    Loaded,
    /// Customer cancelled inside the hosted app
    Cancel,
    /// SDK hands the payment payload to the hosted app
    InitPopup,
    TransactionSuccess,
    TransactionFailed,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Close => "MonnifyPopupClose",
            MessageKind::Complete => "MonnifyPopupComplete",
            MessageKind::Loaded => "MonnifyPopupLoaded",
            MessageKind::Cancel => "MonnifyPopupCancel",
            MessageKind::InitPopup => "INIT_POPUP",
            MessageKind::TransactionSuccess => "TRANSACTION_SUCCESS",
            MessageKind::TransactionFailed => "TRANSACTION_FAILED",
        }
    }

    /// Classify a declared type string; unknown strings are simply
    /// unclassifiable (unrelated cross-document traffic).
    pub fn from_type(declared: &str) -> Option<Self> {
        match declared {
            "MonnifyPopupClose" => Some(MessageKind::Close),
            "MonnifyPopupComplete" => Some(MessageKind::Complete),
            "MonnifyPopupLoaded" => Some(MessageKind::Loaded),
            "MonnifyPopupCancel" => Some(MessageKind::Cancel),
            "INIT_POPUP" => Some(MessageKind::InitPopup),
            "TRANSACTION_SUCCESS" => Some(MessageKind::TransactionSuccess),
            "TRANSACTION_FAILED" => Some(MessageKind::TransactionFailed),
            _ => None,
        }
    }
}

/// Untrusted inbound message envelope.
///
/// The payload shape is implementation-defined on the hosted side, so
/// it stays an opaque [`Value`] until normalization.
#[derive(Clone, Debug, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "type")]
    pub declared_type: String,

    #[serde(default)]
    pub data: Option<Value>,
}

impl InboundMessage {
    pub fn kind(&self) -> Option<MessageKind> {
        MessageKind::from_type(&self.declared_type)
    }
}

/// Outbound init message posted into the checkout frame
#[derive(Debug, Serialize)]
pub struct OutboundMessage<'a> {
    #[serde(rename = "type")]
    declared_type: &'static str,

    data: &'a RuntimePaymentData,
}

impl<'a> OutboundMessage<'a> {
    /// `{ type: "INIT_POPUP", data: <payload> }`
    pub fn init_popup(data: &'a RuntimePaymentData) -> Self {
        Self {
            declared_type: MessageKind::InitPopup.as_str(),
            data,
        }
    }
}
