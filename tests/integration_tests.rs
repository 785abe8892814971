//! Integration tests for the Gita Guide service

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use gita_guide::api::http::create_router;
use gita_guide::{AppState, KnowledgeBase, MessageStore, Role};

fn setup_app(dir: &tempfile::TempDir) -> (Router, Arc<MessageStore>) {
    let kb = Arc::new(KnowledgeBase::curated().unwrap());
    let store = Arc::new(MessageStore::with_file_path(
        dir.path()
            .join("messages.jsonl")
            .to_string_lossy()
            .to_string(),
    ));
    let app = create_router(Arc::new(AppState::new(kb.clone(), store.clone())));
    (app, store)
}

async fn post_ask(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ask")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_ask_returns_matched_teaching() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _store) = setup_app(&dir);

    let (status, body) = post_ask(
        app,
        json!({ "question": "I am stressed about my job, what should I do?" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chapter"], "2.47");
    assert_eq!(body["reference"], "Bhagavad-gītā 2.47");

    let answer = body["answer"].as_str().unwrap();
    assert!(answer.starts_with("Dear Arjuna, you ask: 'I am stressed about my job"));
    assert!(answer.contains("your right is to perform your prescribed duty"));
    assert!(answer.ends_with("where I am remembered, fear cannot stay."));
}

#[tokio::test]
async fn test_ask_persists_both_messages() {
    let dir = tempfile::tempdir().unwrap();
    let (app, store) = setup_app(&dir);

    let (status, _body) = post_ask(
        app,
        json!({ "question": "How do I control my mind?", "conversation_id": "conv-7" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let messages = store.recent(10, Some("conv-7")).unwrap();
    assert_eq!(messages.len(), 2);
    // Most recent first: the answer, then the question
    assert_eq!(messages[0].role, Role::Krishna);
    assert_eq!(
        messages[0].meta.as_ref().unwrap().chapter,
        "6.35".to_string()
    );
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "How do I control my mind?");
}

#[tokio::test]
async fn test_ask_rejects_short_question() {
    let dir = tempfile::tempdir().unwrap();
    let (app, store) = setup_app(&dir);

    let (status, body) = post_ask(app, json!({ "question": " x " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    // Rejected before the matcher or the store are touched
    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_no_signal_question_gets_fallback_teaching() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _store) = setup_app(&dir);

    let (status, body) = post_ask(app, json!({ "question": "the a of it" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chapter"], "18.66");
}

#[tokio::test]
async fn test_ask_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _store) = setup_app(&dir);

    let question = json!({ "question": "what happens to the soul after death?" });
    let (_, first) = post_ask(app.clone(), question.clone()).await;
    for _ in 0..3 {
        let (_, again) = post_ask(app.clone(), question.clone()).await;
        assert_eq!(again["chapter"], first["chapter"]);
    }
    assert_eq!(first["chapter"], "2.20");
}

#[tokio::test]
async fn test_messages_endpoint_lists_history() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _store) = setup_app(&dir);

    for question in ["What is my duty?", "How should I eat?"] {
        let (status, _) = post_ask(app.clone(), json!({ "question": question })).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get_json(app.clone(), "/api/messages").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);

    let (status, body) = get_json(app, "/api/messages?limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    // Total still counts the full history, not the returned page
    assert_eq!(body["total"], 4);
    // Most recent first: the last answer
    assert_eq!(body["data"][0]["role"], "krishna");
}

#[tokio::test]
async fn test_status_reports_backend_and_storage() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _store) = setup_app(&dir);

    let (status, body) = get_json(app.clone(), "/api/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["teachings"], 9);
    assert_eq!(body["message_count"], 0);

    let (_, _) = post_ask(app.clone(), json!({ "question": "what is devotion?" })).await;
    let (_, body) = get_json(app, "/api/status").await;
    assert_eq!(body["message_count"], 2);
}
