//! Frontend Models
//!
//! Data structures for the listing page and the claim endpoint.

use serde::{Deserialize, Serialize};

/// One listed donation, as read from a `.food-card` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodCard {
    pub name: String,
    pub location: String,
}

impl FoodCard {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Body returned by `POST /claim/{id}` (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Notification severity, rendered as the `flash-*` class suffix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// A transient banner message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn class_name(&self) -> String {
        format!("flash flash-{}", self.severity.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_response_without_message() {
        let resp: ClaimResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, None);
    }

    #[test]
    fn test_claim_response_ignores_extra_fields() {
        let resp: ClaimResponse =
            serde_json::from_str(r#"{"success": false, "message": "Already claimed", "code": 409}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Already claimed"));
    }

    #[test]
    fn test_notification_class_name() {
        assert_eq!(Notification::error("x").class_name(), "flash flash-error");
        assert_eq!(Notification::success("x").class_name(), "flash flash-success");
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Notification::info("x").class_name(), "flash flash-info");
    }
}
