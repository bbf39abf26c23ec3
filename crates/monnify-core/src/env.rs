//! Environment Resolution
//!
//! Maps an API-key shape and the compatibility flag to the checkout
//! host/origin pair. Pure and total: an unrecognizable key simply
//! resolves to sandbox.

use serde::{Deserialize, Serialize};

/// Substring marking a production API key
pub const PRODUCTION_KEY_MARKER: &str = "MK_PROD_";

const SANDBOX_HOST: &str = "https://sandbox.sdk.monnify.com";
const PRODUCTION_HOST: &str = "https://sdk.monnify.com";
const SANDBOX_ORIGIN: &str = "https://sandbox.monnify.com";
const PRODUCTION_ORIGIN: &str = "https://api.monnify.com";
const COMPATIBILITY_PATH: &str = "/compatibility-mode";

/// Deployment environment of the hosted checkout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    /// Resolve from the API key alone: anything without the production
    /// marker is sandbox.
    pub fn from_api_key(api_key: &str) -> Self {
        if api_key.contains(PRODUCTION_KEY_MARKER) {
            Environment::Production
        } else {
            Environment::Sandbox
        }
    }

    pub fn is_sandbox(self) -> bool {
        matches!(self, Environment::Sandbox)
    }

    fn host(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_HOST,
            Environment::Production => PRODUCTION_HOST,
        }
    }

    fn origin(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_ORIGIN,
            Environment::Production => PRODUCTION_ORIGIN,
        }
    }
}

/// Resolved endpoint pair for one popup session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    /// Checkout base URL, including the compatibility path when selected
    pub checkout_base: String,

    /// Origin of the hosted checkout application
    pub origin: String,

    environment: Environment,
}

impl Endpoints {
    /// Resolve the endpoint pair for an environment
    pub fn resolve(environment: Environment, compatibility_mode: bool) -> Self {
        let host = environment.host();
        let checkout_base = if compatibility_mode {
            format!("{host}{COMPATIBILITY_PATH}")
        } else {
            host.to_string()
        };

        Self {
            checkout_base,
            origin: environment.origin().to_string(),
            environment,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Session-initialization endpoint
    pub fn init_url(&self) -> String {
        format!("{}/app/transaction/init", self.checkout_base)
    }

    /// Hosted checkout page for an initialized transaction
    pub fn checkout_url(&self, transaction_reference: &str) -> String {
        format!("{}/checkout/{transaction_reference}", self.checkout_base)
    }

    /// Degraded target when session initialization fails: the bare
    /// host, without the compatibility path.
    pub fn fallback_url(&self) -> &'static str {
        self.environment.host()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_without_marker() {
        assert_eq!(Environment::from_api_key("MK_TEST_1"), Environment::Sandbox);
        assert_eq!(Environment::from_api_key(""), Environment::Sandbox);
    }

    #[test]
    fn test_production_with_marker() {
        assert_eq!(
            Environment::from_api_key("MK_PROD_ABC123"),
            Environment::Production
        );
    }

    #[test]
    fn test_endpoint_pair() {
        let sandbox = Endpoints::resolve(Environment::Sandbox, false);
        assert_eq!(sandbox.checkout_base, "https://sandbox.sdk.monnify.com");
        assert_eq!(sandbox.origin, "https://sandbox.monnify.com");

        let production = Endpoints::resolve(Environment::Production, false);
        assert_eq!(production.checkout_base, "https://sdk.monnify.com");
        assert_eq!(production.origin, "https://api.monnify.com");
    }

    #[test]
    fn test_compatibility_path_appended() {
        let sandbox = Endpoints::resolve(Environment::Sandbox, true);
        assert_eq!(
            sandbox.checkout_base,
            "https://sandbox.sdk.monnify.com/compatibility-mode"
        );

        let production = Endpoints::resolve(Environment::Production, true);
        assert_eq!(
            production.checkout_base,
            "https://sdk.monnify.com/compatibility-mode"
        );
    }

    #[test]
    fn test_urls() {
        let endpoints = Endpoints::resolve(Environment::Sandbox, true);
        assert_eq!(
            endpoints.init_url(),
            "https://sandbox.sdk.monnify.com/compatibility-mode/app/transaction/init"
        );
        assert_eq!(
            endpoints.checkout_url("MNFY|1"),
            "https://sandbox.sdk.monnify.com/compatibility-mode/checkout/MNFY|1"
        );
        // Fallback ignores the compatibility path
        assert_eq!(endpoints.fallback_url(), "https://sandbox.sdk.monnify.com");
    }
}
