//! Payment Configuration
//!
//! Caller-supplied payment intent plus its validator. Deserialization
//! is deliberately lenient: a missing required field becomes an empty
//! default so the validator, not serde, owns the diagnostic.

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

use crate::env::Environment;
use crate::error::ValidationError;
use crate::reference::generate_reference;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Caller-supplied payment intent.
///
/// Immutable once validated; [`PaymentConfig::finalize`] returns a
/// derived copy with defaults filled in and never touches the original.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub contract_code: String,

    /// Selects the compatibility checkout path on the resolved host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_mode: Option<bool>,

    #[serde(default)]
    pub amount: Decimal,

    #[serde(default)]
    pub currency: String,

    /// Transaction reference; generated when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default)]
    pub customer_email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(default)]
    pub payment_description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    /// Free-form key-value map; must be a plain object, never an array
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_channel: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_split_config: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_loading_state: Option<bool>,
}

impl PaymentConfig {
    /// Structural and semantic validity check, first failure wins.
    /// No network or DOM access.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.customer_email.is_empty() || !EMAIL_PATTERN.is_match(&self.customer_email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount);
        }
        if self.currency.trim().is_empty() {
            return Err(ValidationError::MissingCurrency);
        }
        if self.payment_description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if self.contract_code.is_empty() {
            return Err(ValidationError::InvalidContractCode);
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::InvalidApiKey);
        }
        if let Some(metadata) = &self.metadata {
            if !metadata.is_object() {
                return Err(ValidationError::InvalidMetadata);
            }
        }
        Ok(())
    }

    /// Environment implied by the API key
    pub fn environment(&self) -> Environment {
        Environment::from_api_key(&self.api_key)
    }

    pub fn compatibility_mode(&self) -> bool {
        self.compatibility_mode.unwrap_or(false)
    }

    /// Derived copy with a guaranteed reference and the loading-state
    /// default applied. The caller's config is left untouched.
    pub fn finalize(&self) -> PaymentConfig {
        let mut finalized = self.clone();
        if finalized.reference.as_deref().is_none_or(str::is_empty) {
            finalized.reference = Some(generate_reference(self.environment()));
        }
        finalized.show_loading_state = Some(self.show_loading_state.unwrap_or(true));
        finalized
    }
}
