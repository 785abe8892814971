//! Conversation history endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;

/// Query parameters for history listing
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    /// Maximum number of messages to return (default: 100, max: 1000)
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Only return messages from this conversation
    #[serde(default)]
    pub conversation_id: Option<String>,
}

fn default_limit() -> usize {
    100
}

/// GET /api/messages - List recent messages, most recent first
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    let limit = params.limit.min(1000);

    match state.store.history(params.conversation_id.as_deref()) {
        Ok(messages) => {
            // Total reflects the full filtered history, not the page size
            let total = messages.len();
            let mut page = messages;
            page.truncate(limit);
            (StatusCode::OK, Json(ApiResponse::with_total(page, total))).into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
