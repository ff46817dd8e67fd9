//! Sensor status domain model.

use serde::{Deserialize, Serialize};

/// Last-known activation state of the external sensor.
///
/// Serializes as `{"status": <bool>}`, the body returned by the status
/// endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorStatus {
    /// Whether the sensor is active
    pub status: bool,
}

impl SensorStatus {
    /// Status with the given activation.
    pub const fn new(status: bool) -> Self {
        Self { status }
    }

    /// Resolve an activation token reported by a client.
    ///
    /// Only a case-insensitive `"true"` activates the sensor; every other
    /// token, empty or malformed ones included, deactivates it.
    pub fn from_token(token: &str) -> Self {
        Self::new(token.to_lowercase() == "true")
    }

    /// Whether the sensor is active.
    pub const fn is_active(self) -> bool {
        self.status
    }
}

impl From<bool> for SensorStatus {
    fn from(status: bool) -> Self {
        Self::new(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        assert!(!SensorStatus::default().is_active());
    }

    #[test]
    fn test_true_token_any_case() {
        assert!(SensorStatus::from_token("true").is_active());
        assert!(SensorStatus::from_token("TRUE").is_active());
        assert!(SensorStatus::from_token("TrUe").is_active());
    }

    #[test]
    fn test_other_tokens_coerce_to_false() {
        for token in ["false", "FALSE", "banana", "", "1", "yes", " true", "true "] {
            assert!(
                !SensorStatus::from_token(token).is_active(),
                "token {token:?} should deactivate"
            );
        }
    }

    #[test]
    fn test_serializes_as_status_object() {
        let json = serde_json::to_string(&SensorStatus::new(true)).unwrap();
        assert_eq!(json, r#"{"status":true}"#);
    }
}
