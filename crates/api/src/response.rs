//! Response envelope shared by every API endpoint.
//!
//! Success bodies are `{"data": ..., "errors": null}`; failure bodies are
//! `{"data": null, "errors": {"url": ..., "error": ...}}`. Use
//! [`ResponseEnvelope`] instead of ad-hoc `serde_json::json!` bodies to keep
//! the shape consistent.

use serde::Serialize;

/// The `{data, errors}` wire envelope.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope<T: Serialize> {
    pub data: Option<T>,
    pub errors: Option<ErrorInfo>,
}

/// Failure detail carried in the envelope: the requested URL (for
/// traceability) and the human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub url: String,
    pub error: String,
}

impl<T: Serialize> ResponseEnvelope<T> {
    /// Wrap a successful payload.
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }
}

impl ResponseEnvelope<serde_json::Value> {
    /// Wrap a failure.
    pub fn error(info: ErrorInfo) -> Self {
        Self {
            data: None,
            errors: Some(info),
        }
    }
}
