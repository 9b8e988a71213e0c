use std::{
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use astro_llm::{ChatRequest, LLMClient, LLMClientConfig, LLMError, LLMProvider, LLMService};
use astro_prediction::{ZodiacSign, OFFLINE_SERVICE_NOTE};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use httpmock::prelude::*;
use prediction_service::{app_module::AppState, app_router::build_app};
use serde_json::{json, Value};
use tower::ServiceExt;

enum Reply {
    Text(&'static str),
    Unauthorized,
    Unavailable,
}

struct StubLLM {
    reply: Reply,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatRequest>>,
}

impl StubLLM {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }
}

#[async_trait]
impl LLMService for StubLLM {
    async fn execute_prompt(&self, request: &ChatRequest) -> Result<String, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Unauthorized => Err(LLMError::from_status(401, "Invalid API key".to_string())),
            Reply::Unavailable => Err(LLMError::Network("connection reset by peer".to_string())),
        }
    }
}

fn app_with(llm: Arc<dyn LLMService + Send + Sync>) -> Router {
    build_app(AppState::new(llm), Path::new("does-not-exist"))
}

fn full_body() -> Value {
    json!({
        "name": "Asha",
        "gender": "Female",
        "dob": "1992-11-03",
        "tob": "14:45",
        "location": "Kochi",
        "zodiac": "Scorpio",
        "skills": ["Coding", "Design"]
    })
}

async fn post_predict(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/predict")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn success_returns_generated_text_without_note() {
    let llm = StubLLM::new(Reply::Text("# Your stars are aligned"));
    let (status, body) = post_predict(app_with(llm.clone()), full_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "# Your stars are aligned"}));
    assert_eq!(llm.calls.load(Ordering::SeqCst), 1);

    let sent = llm.last_request.lock().unwrap().clone().unwrap();
    assert!(sent.system.contains("master astrologer"));
    assert!(sent.user.contains("- Current Skills: Coding, Design"));
    assert!(sent.user.contains("- Zodiac Sign: Scorpio"));
}

#[tokio::test]
async fn required_fields_alone_are_enough() {
    let llm = StubLLM::new(Reply::Text("ok"));
    let (status, _) = post_predict(
        app_with(llm),
        json!({"dob": "2001-01-01", "tob": "00:00", "location": "Oslo", "zodiac": "Capricorn"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn each_missing_required_field_is_rejected() {
    for field in ["dob", "tob", "location", "zodiac"] {
        let llm = StubLLM::new(Reply::Text("unused"));
        let mut body = full_body();
        body.as_object_mut().unwrap().remove(field);

        let (status, response) = post_predict(app_with(llm.clone()), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
        let error = response["error"].as_str().unwrap();
        assert!(error.contains(field), "error {error:?} should name {field}");
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn empty_required_field_is_rejected() {
    let mut body = full_body();
    body["location"] = json!("");

    let (status, response) = post_predict(app_with(StubLLM::new(Reply::Text("x"))), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response, json!({"error": "Missing required fields: location"}));
}

async fn post_raw(app: Router, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
    let mut request = Request::builder().method("POST").uri("/api/predict");
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }
    let response = app
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn body_without_content_type_reports_every_missing_field() {
    let llm = StubLLM::new(Reply::Text("unused"));
    let (status, body) = post_raw(app_with(llm.clone()), None, "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Missing required fields: dob, tob, location, zodiac"})
    );
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_body_is_a_json_400() {
    let wrong_type = json!({
        "dob": "2001-01-01",
        "tob": "00:00",
        "location": "Oslo",
        "zodiac": "Leo",
        "skills": "Coding"
    })
    .to_string();

    for raw in [wrong_type.as_str(), "{not json"] {
        let llm = StubLLM::new(Reply::Text("unused"));
        let (status, body) = post_raw(app_with(llm.clone()), Some("application/json"), raw).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {raw}");
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn authentication_failure_falls_back_to_canned_prediction() {
    let (status, body) =
        post_predict(app_with(StubLLM::new(Reply::Unauthorized)), full_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["note"], json!(OFFLINE_SERVICE_NOTE));
    let result = body["result"].as_str().unwrap();
    assert!(!result.is_empty());
    assert!(result.contains("# Career Prediction for Asha"));
    assert!(result.contains(ZodiacSign::Scorpio.canned_prediction()));
    assert!(result.contains("Your existing skills in Coding, Design"));
}

#[tokio::test]
async fn other_failures_return_500_with_details() {
    let (status, body) =
        post_predict(app_with(StubLLM::new(Reply::Unavailable)), full_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("Failed to get prediction"));
    assert_eq!(
        body["message"],
        json!("Please check your connection and try again")
    );
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("connection reset by peer"));
    assert!(body.get("result").is_none());
}

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let response = app_with(StubLLM::new(Reply::Text("x")))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], json!("OK"));
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}

#[tokio::test]
async fn serves_static_files_for_unknown_paths() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<form id=\"astro-form\"></form>").unwrap();

    let app = build_app(AppState::new(StubLLM::new(Reply::Text("x"))), dir.path());
    let response = app
        .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"<form id=\"astro-form\"></form>");
}

#[tokio::test]
async fn upstream_401_through_real_client_uses_fallback() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(401)
                .json_body(json!({"error": {"message": "No auth credentials found", "code": 401}}));
        })
        .await;

    let config = LLMClientConfig::new("sk-bad").with_base_url(upstream.url("/v1"));
    let llm = Arc::new(LLMClient::new(LLMProvider::OpenAICompatible, config));

    let (status, body) = post_predict(app_with(llm), full_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["note"], json!(OFFLINE_SERVICE_NOTE));
    mock.assert_hits_async(1).await;
}
