use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use audio_digest::application::ports::{KeyPointExtractor, Stage, StageErrorKind, Summarizer};
use audio_digest::domain::{RawKeyPoints, normalize_key_points};
use audio_digest::infrastructure::llm::{
    OpenAiChatClient, OpenAiKeyPointExtractor, OpenAiSummarizer,
};
use audio_digest::infrastructure::text_processing::EMPTY_TRANSCRIPT_SUMMARY;
use audio_digest::presentation::config::OpenAiSettings;

use crate::helpers::mock_http_server::start_mock_server;

struct MockChat {
    base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
    calls: Arc<AtomicUsize>,
    shutdown: tokio::sync::oneshot::Sender<()>,
}

async fn start_mock_chat(status: u16, response: Value) -> MockChat {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let calls = Arc::new(AtomicUsize::new(0));
    let (captured, counter) = (Arc::clone(&requests), Arc::clone(&calls));

    let app = Router::new().route(
        "/chat/completions",
        post(move |Json(body): Json<Value>| {
            let captured = Arc::clone(&captured);
            let counter = Arc::clone(&counter);
            let response = response.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                captured.lock().unwrap().push(body);
                (StatusCode::from_u16(status).unwrap(), Json(response)).into_response()
            }
        }),
    );

    let (base_url, shutdown) = start_mock_server(app).await;
    MockChat {
        base_url,
        requests,
        calls,
        shutdown,
    }
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}}
        ]
    })
}

fn chat_client(base_url: &str) -> Arc<OpenAiChatClient> {
    let settings = OpenAiSettings {
        base_url: base_url.to_string(),
        chat_model: "gpt-test".to_string(),
        ..OpenAiSettings::default()
    };
    Arc::new(OpenAiChatClient::new("sk-test".to_string(), &settings))
}

#[tokio::test]
async fn given_transcript_when_summarizing_then_sends_transcript_and_language() {
    let mock = start_mock_chat(200, completion("  The team agreed\non the budget. ")).await;
    let summarizer = OpenAiSummarizer::new(chat_client(&mock.base_url));

    let summary = summarizer
        .summarize("we talked about the budget", "ar")
        .await
        .unwrap();

    assert_eq!(summary, "The team agreed on the budget.");
    let requests = mock.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["model"], "gpt-test");
    assert_eq!(requests[0]["messages"][0]["role"], "system");
    assert!(
        requests[0]["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("'ar'")
    );
    assert_eq!(
        requests[0]["messages"][1]["content"],
        "we talked about the budget"
    );
    mock.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_blank_transcript_when_summarizing_then_returns_placeholder_without_calling_api() {
    let mock = start_mock_chat(200, completion("unused")).await;
    let summarizer = OpenAiSummarizer::new(chat_client(&mock.base_url));

    let summary = summarizer.summarize("   ", "en").await.unwrap();

    assert_eq!(summary, EMPTY_TRANSCRIPT_SUMMARY);
    assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
    mock.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_rate_limited_api_when_summarizing_then_returns_provider_error() {
    let mock = start_mock_chat(429, json!({"error": {"message": "slow down"}})).await;
    let summarizer = OpenAiSummarizer::new(chat_client(&mock.base_url));

    let err = summarizer.summarize("text", "en").await.unwrap_err();

    assert_eq!(err.stage, Stage::Summarization);
    assert_eq!(err.kind, StageErrorKind::Provider);
    assert!(err.message.contains("rate limited"));
    mock.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_summarizing_then_returns_invalid_response() {
    let mock = start_mock_chat(200, json!({"choices": []})).await;
    let summarizer = OpenAiSummarizer::new(chat_client(&mock.base_url));

    let err = summarizer.summarize("text", "en").await.unwrap_err();

    assert_eq!(err.kind, StageErrorKind::InvalidResponse);
    mock.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_summary_when_extracting_key_points_then_returns_delimited_answer() {
    let mock = start_mock_chat(200, completion("Budget approved //\nHiring paused // ")).await;
    let extractor = OpenAiKeyPointExtractor::new(chat_client(&mock.base_url));

    let raw = extractor.extract("The team approved the budget.").await.unwrap();

    assert_eq!(
        raw,
        RawKeyPoints::Delimited("Budget approved // Hiring paused //".to_string())
    );
    assert_eq!(
        normalize_key_points(raw),
        vec!["Budget approved".to_string(), "Hiring paused".to_string()]
    );
    let requests = mock.requests.lock().unwrap().clone();
    assert!(
        requests[0]["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("//")
    );
    mock.shutdown.send(()).ok();
}

#[tokio::test]
async fn given_failing_api_when_extracting_key_points_then_error_names_the_stage() {
    let mock = start_mock_chat(500, json!({"error": "boom"})).await;
    let extractor = OpenAiKeyPointExtractor::new(chat_client(&mock.base_url));

    let err = extractor.extract("summary").await.unwrap_err();

    assert_eq!(err.stage, Stage::KeyPointExtraction);
    assert_eq!(err.kind, StageErrorKind::Provider);
    mock.shutdown.send(()).ok();
}
