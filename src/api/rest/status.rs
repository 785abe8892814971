//! Service diagnostics endpoint

use std::env;
use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::state::AppState;

/// Response body for `GET /api/status`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub backend: String,
    pub storage: String,
    pub history_path: String,
    pub history_path_env: String,
    pub teachings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_count: Option<usize>,
}

/// GET /api/status - Report backend and storage availability
///
/// Storage problems are reported in the body, never as a 5xx; the
/// endpoint itself always answers.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let storage;
    let message_count;

    if state.store.is_available() {
        match state.store.count() {
            Ok(count) => {
                storage = "✅ Connected & Working".to_string();
                message_count = Some(count);
            }
            Err(e) => {
                storage = format!("⚠️ Available but Error: {}", e);
                message_count = None;
            }
        }
    } else {
        storage = "❌ Not Available".to_string();
        message_count = None;
    }

    let history_path_env = if env::var("GUIDE_HISTORY_PATH").is_ok() {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    };

    Json(StatusResponse {
        backend: "✅ Running".to_string(),
        storage,
        history_path: state.store.file_path().to_string(),
        history_path_env,
        teachings: state.kb.len(),
        message_count,
    })
}
