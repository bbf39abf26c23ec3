//! Payment Response Normalization
//!
//! The hosted checkout replies with heterogeneous payload shapes
//! (fields may be named `status` or `paymentStatus`, `payableAmount`
//! or `authorizedAmount`). Normalization folds every shape into one
//! result model, built fresh per message and never mutated in place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Raw statuses the hosted app reports as money received
const SUCCESS_STATUSES: [&str; 4] = ["SUCCESS", "PAID", "OVERPAID", "PARTIALLY_PAID"];

/// Cancellation marker forced onto close/cancel responses
pub const USER_CANCELLED: &str = "USER_CANCELLED";

/// Binary outcome derived from the raw payload status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[serde(rename = "SUCCESS")]
    Success,

    #[default]
    #[serde(rename = "FAILED")]
    Failed,
}

impl TransactionStatus {
    /// Uppercase the raw status and test membership in the paid set;
    /// absence derives to failed.
    pub fn derive(raw: Option<&str>) -> Self {
        match raw {
            Some(status) if SUCCESS_STATUSES.contains(&status.to_uppercase().as_str()) => {
                TransactionStatus::Success
            }
            _ => TransactionStatus::Failed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Success => "SUCCESS",
            TransactionStatus::Failed => "FAILED",
        }
    }
}

/// Normalized outcome delivered to caller callbacks
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    /// Carried over from the payment data, not from the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_amount: Option<Decimal>,

    /// Derived binary status
    pub status: TransactionStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payable_amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<String>,

    /// Passthrough of any other payload fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentResponse {
    /// Build a normalized response from an untrusted payload.
    ///
    /// `redirect_url` comes from the session's payment data; the
    /// payload's own redirect information is ignored.
    pub fn from_payload(payload: Option<&Value>, redirect_url: Option<&str>) -> Self {
        let fields = payload.and_then(Value::as_object);

        let take_string =
            |name: &str| fields.and_then(|f| f.get(name)).and_then(Value::as_str).map(String::from);
        let take_amount = |name: &str| fields.and_then(|f| f.get(name)).and_then(lenient_decimal);

        let payment_status = take_string("paymentStatus");
        let raw_status = payment_status.clone().or_else(|| take_string("status"));
        let payable_amount = take_amount("payableAmount");
        let completed_on = take_string("completedOn");

        let handled = [
            "paymentStatus",
            "status",
            "payableAmount",
            "authorizedAmount",
            "completedOn",
            "paidOn",
            "responseCode",
            "responseMessage",
            "redirectUrl",
        ];
        let extra = fields
            .map(|f| {
                f.iter()
                    .filter(|(key, _)| !handled.contains(&key.as_str()))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            redirect_url: redirect_url.map(String::from),
            response_code: take_string("responseCode"),
            payment_status,
            response_message: take_string("responseMessage"),
            authorized_amount: payable_amount.or_else(|| take_amount("authorizedAmount")),
            status: TransactionStatus::derive(raw_status.as_deref()),
            paid_on: completed_on.clone(),
            payable_amount,
            completed_on,
            extra,
        }
    }

    /// Force the cancellation marker onto the response, regardless of
    /// what the inner payload said.
    pub fn into_cancelled(mut self) -> Self {
        self.response_code = Some(USER_CANCELLED.into());
        self.payment_status = Some(USER_CANCELLED.into());
        self.response_message = Some("User cancelled Transaction".into());
        self
    }
}

/// Amounts arrive as JSON numbers but occasionally as numeric strings
fn lenient_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => number.as_f64().and_then(|f| Decimal::try_from(f).ok()),
        Value::String(text) => Decimal::from_str(text).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_derive_status_membership() {
        for paid in ["SUCCESS", "PAID", "OVERPAID", "PARTIALLY_PAID", "paid"] {
            assert_eq!(TransactionStatus::derive(Some(paid)), TransactionStatus::Success);
        }
        assert_eq!(TransactionStatus::derive(Some("DECLINED")), TransactionStatus::Failed);
        assert_eq!(TransactionStatus::derive(None), TransactionStatus::Failed);
    }

    #[test]
    fn test_normalization_aliases() {
        let payload = json!({
            "payableAmount": 500,
            "completedOn": "2024-01-01",
            "paymentStatus": "PAID",
        });
        let response = PaymentResponse::from_payload(Some(&payload), None);

        assert_eq!(response.authorized_amount, Some(dec!(500)));
        assert_eq!(response.paid_on.as_deref(), Some("2024-01-01"));
        assert_eq!(response.status, TransactionStatus::Success);
    }

    #[test]
    fn test_payment_status_checked_before_status() {
        let payload = json!({ "paymentStatus": "DECLINED", "status": "PAID" });
        let response = PaymentResponse::from_payload(Some(&payload), None);
        assert_eq!(response.status, TransactionStatus::Failed);
    }

    #[test]
    fn test_authorized_amount_fallback() {
        let payload = json!({ "authorizedAmount": 120.5 });
        let response = PaymentResponse::from_payload(Some(&payload), None);
        assert_eq!(response.authorized_amount, Some(dec!(120.5)));
    }

    #[test]
    fn test_redirect_url_from_payment_data_only() {
        let payload = json!({ "redirectUrl": "https://attacker.example" });
        let response =
            PaymentResponse::from_payload(Some(&payload), Some("https://merchant.example/done"));
        assert_eq!(response.redirect_url.as_deref(), Some("https://merchant.example/done"));
        assert!(response.extra.get("redirectUrl").is_none());
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let payload = json!({ "transactionReference": "MNFY|1", "paymentStatus": "PAID" });
        let response = PaymentResponse::from_payload(Some(&payload), None);
        assert_eq!(response.extra.get("transactionReference"), Some(&json!("MNFY|1")));
    }

    #[test]
    fn test_missing_payload_fails_closed() {
        let response = PaymentResponse::from_payload(None, None);
        assert_eq!(response.status, TransactionStatus::Failed);
        assert!(response.authorized_amount.is_none());
    }

    #[test]
    fn test_cancellation_override() {
        let payload = json!({ "paymentStatus": "PAID", "responseMessage": "ok" });
        let response = PaymentResponse::from_payload(Some(&payload), None).into_cancelled();

        assert_eq!(response.response_code.as_deref(), Some(USER_CANCELLED));
        assert_eq!(response.payment_status.as_deref(), Some(USER_CANCELLED));
        assert_eq!(response.response_message.as_deref(), Some("User cancelled Transaction"));
    }

    #[test]
    fn test_serialized_wire_names() {
        let payload = json!({ "payableAmount": 500, "paymentStatus": "PAID" });
        let value = serde_json::to_value(PaymentResponse::from_payload(Some(&payload), None)).unwrap();

        assert_eq!(value.get("status"), Some(&json!("SUCCESS")));
        assert_eq!(value.get("authorizedAmount"), Some(&json!(500.0)));
        assert!(value.get("redirectUrl").is_none());
    }
}
