//! Endpoint protocol fallback tests against a local stub server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use mahdar_core::{EndpointConfig, Language};
use mahdar_summarize::{OllamaSummarizer, StructuredSummary, Summarizer};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn counting_404(hits: Arc<AtomicUsize>) -> axum::routing::MethodRouter {
    post(move || {
        hits.fetch_add(1, Ordering::SeqCst);
        async { StatusCode::NOT_FOUND }
    })
}

#[tokio::test]
async fn chat_not_found_triggers_exactly_one_generate_retry() {
    let chat_hits = Arc::new(AtomicUsize::new(0));
    let generate_hits = Arc::new(AtomicUsize::new(0));

    let gen = generate_hits.clone();
    let router = Router::new()
        .route("/api/chat", counting_404(chat_hits.clone()))
        .route(
            "/api/generate",
            post(move |Json(body): Json<Value>| {
                gen.fetch_add(1, Ordering::SeqCst);
                async move {
                    assert_eq!(body["stream"], json!(false));
                    assert!(body["prompt"].is_string());
                    Json(json!({
                        "response": "{\"summary\":\"from generate\",\"topics\":[\"a\"],\"decisions\":[],\"tasks\":[],\"speakers\":[]}"
                    }))
                }
            }),
        );
    let base = spawn(router).await;

    let cfg = EndpointConfig::new(base, "test-model", 5);
    let summarizer = OllamaSummarizer::new(&cfg).unwrap();
    let out = summarizer
        .summarize("hello there. short meeting.", "standup", Language::En)
        .await
        .unwrap();

    assert_eq!(out.summary, "from generate");
    assert_eq!(out.topics, vec!["a"]);
    assert_eq!(chat_hits.load(Ordering::SeqCst), 1);
    assert_eq!(generate_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn both_protocols_failing_propagates_error() {
    let chat_hits = Arc::new(AtomicUsize::new(0));
    let generate_hits = Arc::new(AtomicUsize::new(0));

    let router = Router::new()
        .route("/api/chat", counting_404(chat_hits.clone()))
        .route("/api/generate", counting_404(generate_hits.clone()));
    let base = spawn(router).await;

    let cfg = EndpointConfig::new(base, "test-model", 5);
    let summarizer = OllamaSummarizer::new(&cfg).unwrap();
    let result = summarizer
        .summarize("hello there.", "standup", Language::En)
        .await;

    assert!(result.is_err());
    assert_eq!(chat_hits.load(Ordering::SeqCst), 1);
    assert_eq!(generate_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn chat_success_skips_generate() {
    let generate_hits = Arc::new(AtomicUsize::new(0));

    let router = Router::new()
        .route(
            "/api/chat",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["stream"], json!(false));
                assert!(body["messages"].is_array());
                Json(json!({
                    "message": {"content": "{\"summary\":\"from chat\"}"}
                }))
            }),
        )
        .route("/api/generate", counting_404(generate_hits.clone()));
    let base = spawn(router).await;

    let cfg = EndpointConfig::new(base, "test-model", 5);
    let summarizer = OllamaSummarizer::new(&cfg).unwrap();
    let out = summarizer
        .summarize("hello there.", "standup", Language::En)
        .await
        .unwrap();

    assert_eq!(out.summary, "from chat");
    assert_eq!(generate_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unparseable_response_degrades_to_extractive_fallback() {
    let router = Router::new().route(
        "/api/chat",
        post(|| async {
            Json(json!({"message": {"content": "sorry, I cannot produce JSON"}}))
        }),
    );
    let base = spawn(router).await;

    let cfg = EndpointConfig::new(base, "test-model", 5);
    let summarizer = OllamaSummarizer::new(&cfg).unwrap();
    let out = summarizer
        .summarize("First point. Second point. Third point.", "standup", Language::En)
        .await
        .unwrap();

    assert!(out.summary.starts_with("First point."));
    assert_eq!(
        out,
        StructuredSummary {
            summary: out.summary.clone(),
            ..Default::default()
        }
    );
}
