//! Claim Action
//!
//! Request state per listing, the `POST /claim/{id}` exchange, and how its
//! result maps onto the UI.

use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::Messages;
use crate::dom::js_error_message;
use crate::models::{ClaimResponse, Notification};

const BUTTON_PREFIX: &str = "claim-btn-";

/// Characters escaped in an id used as a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("invalid claim response: {0}")]
    Decode(String),
}

pub fn button_id(id: &str) -> String {
    format!("{}{}", BUTTON_PREFIX, id)
}

/// Item id from a `claim-btn-{id}` element id
pub fn parse_button_id(element_id: &str) -> Option<&str> {
    element_id
        .strip_prefix(BUTTON_PREFIX)
        .filter(|id| !id.is_empty())
}

pub fn claim_url(endpoint: &str, id: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        utf8_percent_encode(id, PATH_SEGMENT)
    )
}

/// Request state of one listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClaimState {
    #[default]
    Idle,
    Pending,
    Claimed,
}

/// Per-item claim states; guards against duplicate in-flight requests
#[derive(Debug, Default)]
pub struct ClaimBook {
    states: HashMap<String, ClaimState>,
}

impl ClaimBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: &str) -> ClaimState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// Move `id` to `Pending`; false if it is not idle
    pub fn begin(&mut self, id: &str) -> bool {
        if self.state(id) != ClaimState::Idle {
            return false;
        }
        self.states.insert(id.to_string(), ClaimState::Pending);
        true
    }

    pub fn settle(&mut self, id: &str, outcome: &ClaimOutcome) {
        match outcome {
            ClaimOutcome::Claimed => {
                self.states.insert(id.to_string(), ClaimState::Claimed);
            }
            ClaimOutcome::Rejected { .. } | ClaimOutcome::Failed => {
                self.states.remove(id);
            }
        }
    }

    /// Drop all state for a listing that left the page
    pub fn forget(&mut self, id: &str) {
        self.states.remove(id);
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == ClaimState::Pending)
            .count()
    }
}

/// What the UI does with a finished claim request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed,
    /// Server answered `success: false`
    Rejected { message: Option<String> },
    /// Transport or decode failure
    Failed,
}

impl ClaimOutcome {
    pub fn from_result(result: &Result<ClaimResponse, ClaimError>) -> Self {
        match result {
            Ok(resp) if resp.success => ClaimOutcome::Claimed,
            Ok(resp) => ClaimOutcome::Rejected {
                message: resp.message.clone().filter(|m| !m.trim().is_empty()),
            },
            Err(_) => ClaimOutcome::Failed,
        }
    }

    pub fn notification(&self, messages: &Messages) -> Notification {
        match self {
            ClaimOutcome::Claimed => Notification::success(messages.claim_success.clone()),
            ClaimOutcome::Rejected { message: Some(m) } => Notification::error(m.clone()),
            ClaimOutcome::Rejected { message: None } | ClaimOutcome::Failed => {
                Notification::error(messages.claim_failed.clone())
            }
        }
    }
}

/// `POST` the claim with a JSON content type and no body, then decode the reply
pub async fn send_claim(url: &str) -> Result<ClaimResponse, ClaimError> {
    let request_err = |e: wasm_bindgen::JsValue| ClaimError::Request(js_error_message(&e));

    let window = web_sys::window().ok_or_else(|| ClaimError::Request("no window".to_string()))?;

    let headers = Headers::new().map_err(request_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(request_err)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    let request = Request::new_with_str_and_init(url, &init).map_err(request_err)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(request_err)?
        .dyn_into()
        .map_err(request_err)?;

    let decode_err = |e: wasm_bindgen::JsValue| ClaimError::Decode(js_error_message(&e));
    let body = JsFuture::from(response.json().map_err(decode_err)?)
        .await
        .map_err(decode_err)?;

    serde_wasm_bindgen::from_value(body).map_err(|e| ClaimError::Decode(e.to_string()))
}
