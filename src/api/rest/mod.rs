//! REST API module for HTTP endpoints
//!
//! Provides the question-answering endpoint and supporting data access:
//! - `POST /api/ask` - Answer a question with a matched teaching
//! - `GET /api/messages` - List recent conversation history
//! - `GET /api/status` - Backend and storage diagnostics

pub mod ask;
pub mod messages;
pub mod status;

use serde::Serialize;

/// Standard API response wrapper for list endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for paginated responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}
