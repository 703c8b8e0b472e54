//! UI Configuration
//!
//! Endpoint paths, delays, and user-facing text. Pages may override any field
//! through a `<script type="application/json" id="sharebite-config">` block.

use serde::Deserialize;
use thiserror::Error;

/// Id of the optional JSON config block
pub const CONFIG_SCRIPT_ID: &str = "sharebite-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Claim button labels for each request state
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClaimLabels {
    pub idle: String,
    pub pending: String,
    pub claimed: String,
}

impl Default for ClaimLabels {
    fn default() -> Self {
        Self {
            idle: "Claim This Food".to_string(),
            pending: "Claiming...".to_string(),
            claimed: "Claimed!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub claim_success: String,
    /// Shown on transport errors, or when the server rejects without a message
    pub claim_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            claim_success: "Food claimed successfully! Contact the donor to arrange pickup.".to_string(),
            claim_failed: "Error claiming food. Please try again.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub claim_endpoint: String,
    pub donate_url: String,
    /// Time a claimed card stays on screen before its exit animation
    pub removal_delay_ms: u32,
    pub exit_animation_ms: u32,
    pub notification_ttl_ms: u32,
    pub min_food_name_len: usize,
    pub labels: ClaimLabels,
    pub messages: Messages,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            claim_endpoint: "/claim".to_string(),
            donate_url: "/donate".to_string(),
            removal_delay_ms: 2000,
            exit_animation_ms: 300,
            notification_ttl_ms: 5000,
            min_food_name_len: 3,
            labels: ClaimLabels::default(),
            messages: Messages::default(),
        }
    }
}

impl UiConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read the config block from the page, falling back to defaults
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::error_1(&format!("[Config] {}, using defaults", e).into());
                Self::default()
            }
        }
    }

    /// CSS animation value for the exit transition
    pub fn slide_out(&self) -> String {
        format!("slideOut {}ms ease-in", self.exit_animation_ms)
    }
}
