// src/types/response.rs
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

pub const ANALYSIS_KEY: &str = "analysis";
pub const COMPARISON_KEY: &str = "comparison";
pub const SUGGESTIONS_KEY: &str = "suggestions";
pub const SKILLS_KEY: &str = "skills";

/// `{success, <payload>|error}` envelope returned by every `/api` endpoint.
///
/// Error responses from the backend usually omit `success` entirely and
/// only carry `error`, so both fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl ApiEnvelope {
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// Unwrap the named payload of a 2xx response.
    pub fn into_payload(mut self, key: &str, fallback_error: &str) -> Result<Value, ApiError> {
        if self.success != Some(true) {
            return Err(ApiError::Rejected(
                self.error.unwrap_or_else(|| fallback_error.to_string()),
            ));
        }

        self.payload
            .remove(key)
            .ok_or_else(|| ApiError::Malformed(format!("missing '{}' in response", key)))
    }

    /// Message for a non-2xx response.
    pub fn error_message(&self, fallback_error: &str) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| fallback_error.to_string())
    }
}
