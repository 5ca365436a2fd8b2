//! Standardized response envelope.
//!
//! Wraps any serializable payload in a `{ success, data, error }` shape so
//! callers (HTTP handlers, CLI frontends, job runners) emit one consistent
//! structure for both outcomes.

use crate::core::error::{Error, Hint, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl ApiResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
                retryable: err.retryable,
            }),
        }
    }
}

/// Wrap a fallible computation into a serialized envelope.
/// Success and failure both produce valid JSON; only envelope
/// serialization itself can fail.
pub fn envelope_json<T: Serialize>(result: Result<T>) -> Result<String> {
    match result {
        Ok(data) => ApiResponse::success(data).to_json(),
        Err(err) => ApiResponse::<()>::from_error(&err).to_json(),
    }
}
