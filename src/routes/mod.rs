//! Router assembly: HTTP endpoints, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - JSON API under `/api/v1/...`
/// - CORS (allow any origin/method/headers), adjust for production if needed
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/analysis", post(http::http_post_analysis))
        .route("/api/v1/learning-path", post(http::http_post_learning_path))
        .route("/api/v1/questions", post(http::http_post_questions))
        .route("/api/v1/difficulty", post(http::http_post_difficulty))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(Arc::new(AppState::default()))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let req = Request::builder().uri("/api/v1/health").body(Body::empty()).unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap(), json!({ "ok": true }));
    }

    #[tokio::test]
    async fn grade_one_addition_batch_over_http() {
        let (status, body) = post_json(
            "/api/v1/questions",
            json!({
                "topic": { "grade": 1, "category": "Operations", "learning_outcome": "addition up to 100" },
                "count": 5,
                "seed": 42
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["requested"], json!(5));
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 5);
        for q in questions {
            assert_eq!(q["type"], json!("number"));
            assert!(q["question"].as_str().unwrap().starts_with("What is "));
            assert!(q.get("options").is_none());
        }
    }

    #[tokio::test]
    async fn analysis_accepts_loose_rows() {
        let (status, body) = post_json(
            "/api/v1/analysis",
            json!({
                "studentData": {
                    "grade": "3",
                    "progress": [
                        { "topic_id": 1, "best_score": "95", "completed": 1, "progress_percentage": 100 },
                        { "topic_id": 2, "best_score": 40, "completed": 0, "progress_percentage": 30, "attempts": 2 }
                    ]
                },
                "curriculumTopics": [
                    { "id": 1, "grade": 3, "category": "Operations", "order_index": 1, "topic_title": "Adding" },
                    { "id": 2, "grade": 3, "category": "Operations", "order_index": 2, "topic_title": "Subtracting" },
                    { "id": 3, "grade": 3, "category": "Geometry", "order_index": 3, "topic_title": "Shapes" }
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let analysis = &body["analysis"];
        assert_eq!(analysis["statistics"]["totalTopics"], json!(2));
        assert_eq!(analysis["statistics"]["averageScore"], json!(68));
        assert!(!analysis["remedialActions"].as_array().unwrap().is_empty());
        assert!(analysis["summary"].as_str().unwrap().contains("68% average"));
    }

    #[tokio::test]
    async fn learning_path_and_difficulty() {
        let (status, body) = post_json(
            "/api/v1/learning-path",
            json!({ "studentData": { "grade": 2, "progress": [] }, "availableTopics": [] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"]["nextTopics"], json!([]));

        let (status, body) = post_json("/api/v1/difficulty", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "level": 3, "label": "medium" }));
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/questions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert!(res.status().is_client_error());
    }
}
