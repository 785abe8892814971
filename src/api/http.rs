//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{ask, messages, status};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins, as the original frontend expects
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness
        .route("/", get(read_root))
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/hello", get(hello))
        .route("/api/ask", post(ask::ask))
        .route("/api/messages", get(messages::list_messages))
        .route("/api/status", get(status::status))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Root liveness message
async fn read_root() -> Json<Value> {
    Json(json!({ "message": "Gita Guide backend is running" }))
}

/// Greeting endpoint
async fn hello() -> Json<Value> {
    Json(json!({ "message": "Jai Shri Krishna! Ask your question at POST /api/ask" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge_base::KnowledgeBase;
    use crate::store::MessageStore;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn test_router(dir: &tempfile::TempDir) -> Router {
        let kb = Arc::new(KnowledgeBase::curated().unwrap());
        let store = Arc::new(MessageStore::with_file_path(
            dir.path().join("messages.jsonl").to_string_lossy().to_string(),
        ));
        create_router(Arc::new(AppState::new(kb, store)))
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_router(&dir);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_root_and_hello() {
        let dir = tempfile::tempdir().unwrap();

        for uri in ["/", "/api/hello"] {
            let app = test_router(&dir);
            let response = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), 200);
        }
    }
}
