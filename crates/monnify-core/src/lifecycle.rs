//! Popup Lifecycle State Machine
//!
//! Classifies inbound cross-document messages and decides what the
//! popup controller must do: nothing, or tear down and fire callbacks.
//! Pure state: no DOM, no callbacks, so every transition is testable
//! natively.

use crate::message::{InboundMessage, MessageKind};
use crate::response::PaymentResponse;

/// Popup session states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LifecycleState {
    /// Frame element exists, hosted app not yet loaded
    #[default]
    AwaitingLoad,

    /// Hosted app loaded and initialized, customer is paying
    AwaitingUserAction,

    /// A terminal message was processed; the overlay is gone
    Terminated,
}

/// What the controller must do with a classified message
#[derive(Clone, Debug)]
pub enum Disposition {
    /// Unrecognized, non-terminal or post-terminal traffic
    Ignored,

    /// Customer closed or cancelled: remove the overlay, then invoke
    /// the close callback with the cancellation-marked response
    Cancelled(PaymentResponse),

    /// Transaction finished (success- or failed-typed): remove the
    /// overlay, then invoke complete followed by close
    Completed(PaymentResponse),
}

/// One state machine instance per popup session
#[derive(Clone, Debug)]
pub struct Lifecycle {
    state: LifecycleState,
    redirect_url: Option<String>,
}

impl Lifecycle {
    /// Begin in `AwaitingLoad`. `redirect_url` is the merchant's
    /// redirect target from the payment data; normalized responses
    /// carry it instead of anything the hosted app sends.
    pub fn new(redirect_url: Option<String>) -> Self {
        Self {
            state: LifecycleState::AwaitingLoad,
            redirect_url,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == LifecycleState::Terminated
    }

    /// The frame fired its load event. Idempotent: browsers can fire
    /// load more than once (about:blank then the real document).
    pub fn frame_loaded(&mut self) {
        if self.state == LifecycleState::AwaitingLoad {
            self.state = LifecycleState::AwaitingUserAction;
        }
    }

    /// Classify one inbound message and transition accordingly.
    ///
    /// Both TRANSACTION_SUCCESS and TRANSACTION_FAILED run the same
    /// normalization, so a failed-typed message whose payload carries
    /// a paid-like status still derives SUCCESS. The hosted app relies
    /// on that shape, so it stays.
    pub fn dispatch(&mut self, message: &InboundMessage) -> Disposition {
        if self.is_terminated() {
            return Disposition::Ignored;
        }

        let Some(kind) = message.kind() else {
            tracing::debug!(declared_type = %message.declared_type, "Ignoring unknown message");
            return Disposition::Ignored;
        };

        let normalize =
            || PaymentResponse::from_payload(message.data.as_ref(), self.redirect_url.as_deref());

        match kind {
            MessageKind::Cancel | MessageKind::Close => {
                self.state = LifecycleState::Terminated;
                tracing::info!(kind = kind.as_str(), "Checkout dismissed by customer");
                Disposition::Cancelled(normalize().into_cancelled())
            }
            MessageKind::TransactionSuccess | MessageKind::TransactionFailed => {
                self.state = LifecycleState::Terminated;
                let response = normalize();
                tracing::info!(
                    kind = kind.as_str(),
                    status = response.status.as_str(),
                    "Checkout finished"
                );
                Disposition::Completed(response)
            }
            MessageKind::Loaded | MessageKind::Complete | MessageKind::InitPopup => {
                Disposition::Ignored
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{TransactionStatus, USER_CANCELLED};
    use serde_json::json;

    fn inbound(value: serde_json::Value) -> InboundMessage {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_load_transition() {
        let mut lifecycle = Lifecycle::new(None);
        assert_eq!(lifecycle.state(), LifecycleState::AwaitingLoad);

        lifecycle.frame_loaded();
        assert_eq!(lifecycle.state(), LifecycleState::AwaitingUserAction);

        // Repeat load events do not regress the state
        lifecycle.frame_loaded();
        assert_eq!(lifecycle.state(), LifecycleState::AwaitingUserAction);
    }

    #[test]
    fn test_success_message_completes() {
        let mut lifecycle = Lifecycle::new(Some("https://merchant.example/done".into()));
        lifecycle.frame_loaded();

        let disposition = lifecycle.dispatch(&inbound(json!({
            "type": "TRANSACTION_SUCCESS",
            "data": { "payableAmount": 500, "completedOn": "2024-01-01", "paymentStatus": "PAID" },
        })));

        let Disposition::Completed(response) = disposition else {
            panic!("expected completion");
        };
        assert_eq!(response.status, TransactionStatus::Success);
        assert_eq!(response.paid_on.as_deref(), Some("2024-01-01"));
        assert_eq!(response.redirect_url.as_deref(), Some("https://merchant.example/done"));
        assert!(lifecycle.is_terminated());
    }

    #[test]
    fn test_failed_message_completes_with_failed_status() {
        let mut lifecycle = Lifecycle::new(None);
        lifecycle.frame_loaded();

        let disposition = lifecycle.dispatch(&inbound(json!({
            "type": "TRANSACTION_FAILED",
            "data": { "paymentStatus": "DECLINED" },
        })));

        let Disposition::Completed(response) = disposition else {
            panic!("expected completion");
        };
        assert_eq!(response.status, TransactionStatus::Failed);
    }

    #[test]
    fn test_failed_typed_message_with_paid_payload_derives_success() {
        // Wire-compat quirk: the failed path shares the success
        // normalization
        let mut lifecycle = Lifecycle::new(None);
        lifecycle.frame_loaded();

        let disposition = lifecycle.dispatch(&inbound(json!({
            "type": "TRANSACTION_FAILED",
            "data": { "paymentStatus": "PAID" },
        })));

        let Disposition::Completed(response) = disposition else {
            panic!("expected completion");
        };
        assert_eq!(response.status, TransactionStatus::Success);
    }

    #[test]
    fn test_cancel_and_close_force_cancellation_marker() {
        for declared in ["MonnifyPopupCancel", "MonnifyPopupClose"] {
            let mut lifecycle = Lifecycle::new(None);
            lifecycle.frame_loaded();

            let disposition = lifecycle.dispatch(&inbound(json!({
                "type": declared,
                "data": { "paymentStatus": "PAID" },
            })));

            let Disposition::Cancelled(response) = disposition else {
                panic!("expected cancellation");
            };
            assert_eq!(response.response_code.as_deref(), Some(USER_CANCELLED));
            assert_eq!(response.payment_status.as_deref(), Some(USER_CANCELLED));
            assert!(lifecycle.is_terminated());
        }
    }

    #[test]
    fn test_non_terminal_kinds_ignored() {
        let mut lifecycle = Lifecycle::new(None);
        lifecycle.frame_loaded();

        for declared in ["MonnifyPopupLoaded", "MonnifyPopupComplete", "INIT_POPUP", "unrelated"] {
            let disposition = lifecycle.dispatch(&inbound(json!({ "type": declared })));
            assert!(matches!(disposition, Disposition::Ignored));
            assert!(!lifecycle.is_terminated());
        }
    }

    #[test]
    fn test_messages_after_termination_ignored() {
        let mut lifecycle = Lifecycle::new(None);
        lifecycle.frame_loaded();
        lifecycle.dispatch(&inbound(json!({ "type": "MonnifyPopupClose" })));

        let disposition =
            lifecycle.dispatch(&inbound(json!({ "type": "TRANSACTION_SUCCESS" })));
        assert!(matches!(disposition, Disposition::Ignored));
    }
}
