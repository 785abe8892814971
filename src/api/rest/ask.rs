//! Question-answering endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::api::state::AppState;
use crate::matcher::select_teaching;
use crate::types::{Message, MessageMeta};

/// Minimum length of a trimmed question
const MIN_QUESTION_LEN: usize = 2;

const PREFACE_OPEN: &str = "Dear Arjuna, you ask: '";
const PREFACE_CLOSE: &str = "'. Listen with a tranquil heart. ";
const CLOSING: &str =
    " Remember Me and move forward step by step; where I am remembered, fear cannot stay.";

/// Request body for `POST /api/ask`
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Arjuna's question
    pub question: String,
    /// Conversation identifier (opaque, used only for history grouping)
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Response body for `POST /api/ask`
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// POST /api/ask - Answer a question with the best-matching teaching
///
/// Selects a teaching, wraps it in the fixed greeting/closing voice, and
/// records both sides of the exchange. History failures are logged and
/// swallowed; the answer is returned regardless.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> impl IntoResponse {
    let question = req.question.trim();
    if question.chars().count() < MIN_QUESTION_LEN {
        let error = ApiError::bad_request("Question is too short");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let teaching = select_teaching(question, &state.kb);

    let answer = format!(
        "{}{}{}{}{}",
        PREFACE_OPEN, question, PREFACE_CLOSE, teaching.teaching, CLOSING
    );

    let user_message = Message::user(question, req.conversation_id.clone());
    let answer_message = Message::answer(
        answer.clone(),
        req.conversation_id.clone(),
        teaching.image_url,
        MessageMeta {
            chapter: teaching.chapter.to_string(),
            reference: teaching.reference.to_string(),
        },
    );

    for message in [&user_message, &answer_message] {
        if let Err(e) = state.store.append(message) {
            eprintln!("[Store] Failed to persist message: {}", e);
        }
    }

    let response = AskResponse {
        answer,
        verse: Some(teaching.verse.to_string()),
        chapter: Some(teaching.chapter.to_string()),
        reference: Some(teaching.reference.to_string()),
        image_url: Some(teaching.image_url.to_string()),
    };

    (StatusCode::OK, Json(response)).into_response()
}
