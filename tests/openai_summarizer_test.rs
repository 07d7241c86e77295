use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use mediscribe::application::ports::{Summarizer, SummarizerError};
use mediscribe::infrastructure::llm::OpenAiSummarizer;

async fn start_mock_chat_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn summarizer_for(base_url: &str) -> OpenAiSummarizer {
    OpenAiSummarizer::new(
        "test-key".to_string(),
        Some(base_url.to_string()),
        Some("gpt-4o-mini".to_string()),
        0.2,
    )
}

#[tokio::test]
async fn given_transcript_when_summarizing_then_returns_first_choice_content() {
    let response_body = r#"{"choices": [{"message": {"role": "assistant", "content": "Subjective: headache.\nObjective: none.\nAssessment: tension.\nPlan: rest."}}]}"#;
    let (base_url, shutdown_tx) = start_mock_chat_server(200, response_body).await;

    let summarizer = summarizer_for(&base_url);
    let result = summarizer.summarize("patient transcript").await.unwrap();

    assert!(result.starts_with("Subjective:"));
    assert!(result.contains("Plan:"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_summarizing_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_chat_server(500, "internal error").await;

    let summarizer = summarizer_for(&base_url);
    let result = summarizer.summarize("patient transcript").await;

    assert!(matches!(result, Err(SummarizerError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_summarizing_then_returns_rate_limited() {
    let (base_url, shutdown_tx) = start_mock_chat_server(429, "slow down").await;

    let summarizer = summarizer_for(&base_url);
    let result = summarizer.summarize("patient transcript").await;

    assert!(matches!(result, Err(SummarizerError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_choices_when_summarizing_then_returns_invalid_response() {
    let response_body = r#"{"choices": []}"#;
    let (base_url, shutdown_tx) = start_mock_chat_server(200, response_body).await;

    let summarizer = summarizer_for(&base_url);
    let result = summarizer.summarize("patient transcript").await;

    assert!(matches!(result, Err(SummarizerError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
