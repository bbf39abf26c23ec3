//! Session Initialization API

use monnify_core::{Endpoints, RuntimePaymentData, SdkError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct InitResponse {
    data: InitResponseData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitResponseData {
    payment_data: InitPaymentData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitPaymentData {
    transaction_reference: String,
}

/// Initialize a checkout session on the hosted service and return the
/// server-assigned transaction reference. Any transport or shape
/// deviation is an error; the caller degrades to the fallback frame.
pub async fn init_transaction(
    endpoints: &Endpoints,
    payload: &RuntimePaymentData,
) -> Result<String, SdkError> {
    let client = reqwest::Client::new();

    let response = client
        .post(endpoints.init_url())
        .json(payload)
        .send()
        .await
        .map_err(|error| SdkError::Init(error.to_string()))?;

    if !response.status().is_success() {
        return Err(SdkError::Init(format!(
            "unexpected status {}",
            response.status()
        )));
    }

    let body: InitResponse = response
        .json()
        .await
        .map_err(|error| SdkError::Init(error.to_string()))?;

    Ok(body.data.payment_data.transaction_reference)
}
