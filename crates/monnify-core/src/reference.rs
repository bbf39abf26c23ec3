//! Transaction Reference Generation

use chrono::Utc;
use uuid::Uuid;

use crate::env::Environment;

/// Generate a best-effort unique transaction reference for callers
/// that did not supply one. Not cryptographically unique.
pub fn generate_reference(environment: Environment) -> String {
    let marker = if environment.is_sandbox() { "TEST|" } else { "" };
    let millis = Utc::now().timestamp_millis();
    // 1..=1_000_000, uuid-derived
    let suffix = (Uuid::new_v4().as_u128() % 1_000_000) + 1;
    format!("MNFY|PAYREF|{marker}GENERATED|{millis}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_prefix() {
        let reference = generate_reference(Environment::Sandbox);
        assert!(reference.starts_with("MNFY|PAYREF|TEST|GENERATED|"));
    }

    #[test]
    fn test_production_prefix() {
        let reference = generate_reference(Environment::Production);
        assert!(reference.starts_with("MNFY|PAYREF|GENERATED|"));
        assert!(!reference.contains("TEST"));
    }

    #[test]
    fn test_references_differ() {
        let a = generate_reference(Environment::Sandbox);
        let b = generate_reference(Environment::Sandbox);
        assert_ne!(a, b);
    }
}
