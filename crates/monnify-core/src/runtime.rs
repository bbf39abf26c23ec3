//! Runtime Payment Data
//!
//! The finalized configuration plus an environment fingerprint,
//! assembled once per popup session. Sent verbatim to the remote init
//! endpoint and echoed into the checkout frame as the INIT_POPUP
//! payload, so every wire name below is contractual.

use serde::{Deserialize, Serialize};

use crate::config::PaymentConfig;

/// Browser fingerprint block (`otherPaymentData` on the wire).
///
/// Value types mirror the hosted app's expectations: the boolean flag
/// really is a boolean, everything else travels as strings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserEnvironment {
    pub http_browser_language: String,
    pub http_browser_java_enabled: bool,
    pub http_browser_java_script_enabled: String,
    pub http_browser_color_depth: String,
    pub http_browser_screen_height: String,
    pub http_browser_screen_width: String,
    pub http_browser_time_difference: String,
    pub user_agent_browser_value: String,
}

impl BrowserEnvironment {
    /// Build from the values a hosting page can actually report; the
    /// remaining fields carry their fixed wire values.
    pub fn new(
        language: impl Into<String>,
        screen_height: impl Into<String>,
        screen_width: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            http_browser_language: language.into(),
            http_browser_java_enabled: false,
            http_browser_java_script_enabled: "true".into(),
            http_browser_color_depth: "24".into(),
            http_browser_screen_height: screen_height.into(),
            http_browser_screen_width: screen_width.into(),
            http_browser_time_difference: String::new(),
            user_agent_browser_value: user_agent.into(),
        }
    }
}

/// Payload for one popup session: the finalized config flattened next
/// to the fingerprint block. Never persisted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimePaymentData {
    #[serde(flatten)]
    pub config: PaymentConfig,

    pub other_payment_data: BrowserEnvironment,
}

impl RuntimePaymentData {
    pub fn new(config: PaymentConfig, environment: BrowserEnvironment) -> Self {
        Self {
            config,
            other_payment_data: environment,
        }
    }

    /// Transaction reference, guaranteed present after
    /// [`PaymentConfig::finalize`]
    pub fn reference(&self) -> Option<&str> {
        self.config.reference.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fingerprint_wire_names() {
        let environment = BrowserEnvironment::new("en-US", "900", "1440", "agent");
        let value = serde_json::to_value(&environment).unwrap();

        assert_eq!(value.get("httpBrowserLanguage"), Some(&json!("en-US")));
        assert_eq!(value.get("httpBrowserJavaEnabled"), Some(&json!(false)));
        assert_eq!(value.get("httpBrowserJavaScriptEnabled"), Some(&json!("true")));
        assert_eq!(value.get("httpBrowserColorDepth"), Some(&json!("24")));
        assert_eq!(value.get("httpBrowserScreenHeight"), Some(&json!("900")));
        assert_eq!(value.get("httpBrowserScreenWidth"), Some(&json!("1440")));
        assert_eq!(value.get("httpBrowserTimeDifference"), Some(&json!("")));
        assert_eq!(value.get("userAgentBrowserValue"), Some(&json!("agent")));
    }

    #[test]
    fn test_config_flattened_beside_fingerprint() {
        let config = PaymentConfig {
            api_key: "MK_TEST_1".into(),
            currency: "NGN".into(),
            ..Default::default()
        };
        let payload = RuntimePaymentData::new(config, BrowserEnvironment::default());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value.get("apiKey"), Some(&json!("MK_TEST_1")));
        assert_eq!(value.get("currency"), Some(&json!("NGN")));
        assert!(value.get("otherPaymentData").is_some());
        assert!(value.get("config").is_none());
    }
}
