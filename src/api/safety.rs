//! Content safety gate.
//!
//! Unlike the other clients this one is fail-closed: any transport error,
//! non-success status, or unparseable body is an "unsafe" verdict, never an
//! error to the caller.

use super::client::UREQ_AGENT;
use crate::config::Config;
use log::warn;

pub struct ContentSafetyGate {
    endpoint: String,
}

impl ContentSafetyGate {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.safety_endpoint.clone(),
        }
    }

    /// Returns true iff the moderation endpoint answers `{"data":"safe"}`.
    pub fn is_content_safe(&self, message: &str) -> bool {
        let payload = serde_json::json!({ "message": message });

        let resp = match UREQ_AGENT.post(&self.endpoint).send_json(payload) {
            Ok(resp) => resp,
            Err(e) => {
                warn!("safety check request failed, treating content as unsafe: {}", e);
                return false;
            }
        };

        let json: serde_json::Value = match resp.into_body().read_json() {
            Ok(json) => json,
            Err(e) => {
                warn!("safety check response unparseable, treating content as unsafe: {}", e);
                return false;
            }
        };

        json.get("data").and_then(|d| d.as_str()) == Some("safe")
    }
}
