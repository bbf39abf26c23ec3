//! Error Types

use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// Reasons a payment configuration is rejected before any side effect.
///
/// Display strings are the diagnostics the hosted checkout integrators
/// already key on, so they must stay stable.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Config was null, missing or not a key-value object
    #[error("Invalid Payment Data.")]
    InvalidPayload,

    /// Customer email missing or not `local@domain.tld` shaped
    #[error("Customer email not provided or invalid")]
    InvalidEmail,

    /// Amount missing, zero or not positive
    #[error("Invalid Amount.")]
    InvalidAmount,

    /// Currency blank after trimming
    #[error("Currency is required.")]
    MissingCurrency,

    /// Payment description blank after trimming
    #[error("Payment description is required.")]
    MissingDescription,

    /// Contract code missing
    #[error("Invalid Contract Code")]
    InvalidContractCode,

    /// API key missing
    #[error("Invalid API Key")]
    InvalidApiKey,

    /// Metadata present but not a plain key-value object
    #[error("Invalid metadata.")]
    InvalidMetadata,
}

/// SDK error types
#[derive(Error, Debug)]
pub enum SdkError {
    /// Caller-supplied configuration rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A previous popup session is still attached to the document
    #[error("A checkout session is already open")]
    SessionActive,

    /// Browser environment missing or DOM mutation rejected
    #[error("Browser error: {0}")]
    Dom(String),

    /// Remote session-initialization request failed
    #[error("Session initialization failed: {0}")]
    Init(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SdkError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, SdkError::Init(_))
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            SdkError::Validation(reason) => reason.to_string(),
            SdkError::SessionActive => {
                "A checkout window is already open. Close it before starting a new payment.".into()
            }
            SdkError::Init(_) => "We could not reach the payment service. Please try again.".into(),
            _ => "An unexpected error occurred.".into(),
        }
    }
}
