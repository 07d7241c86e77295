use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use mediscribe::application::ports::{TranscriptionEngine, TranscriptionError};
use mediscribe::infrastructure::audio::OpenAiWhisperEngine;

async fn start_mock_transcription_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/audio/transcriptions",
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

fn engine_for(base_url: &str) -> OpenAiWhisperEngine {
    OpenAiWhisperEngine::new(
        "test-key".to_string(),
        Some(base_url.to_string()),
        Some("whisper-1".to_string()),
        Some("es".to_string()),
    )
}

#[tokio::test]
async fn given_valid_audio_bytes_when_transcribing_then_returns_transcript_text() {
    let response_body = r#"{"text": "El paciente refiere cefalea.", "segments": []}"#;
    let (base_url, shutdown_tx) = start_mock_transcription_server(200, response_body).await;

    let engine = engine_for(&base_url);
    let result = engine.transcribe(b"fake audio bytes").await;

    assert_eq!(result.unwrap(), "El paciente refiere cefalea.");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_transcribing_then_returns_api_error() {
    let response_body = r#"{"error": {"message": "bad audio"}}"#;
    let (base_url, shutdown_tx) = start_mock_transcription_server(400, response_body).await;

    let engine = engine_for(&base_url);
    let result = engine.transcribe(b"bad audio").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_body_when_transcribing_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_transcription_server(200, "plain transcript").await;

    let engine = engine_for(&base_url);
    let result = engine.transcribe(b"fake audio bytes").await;

    assert!(matches!(result, Err(TranscriptionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_api_key_when_transcribing_then_fails_without_network_call() {
    let engine = OpenAiWhisperEngine::new(
        "".to_string(),
        Some("http://127.0.0.1:1".to_string()),
        None,
        None,
    );

    assert!(matches!(
        engine.ensure_ready(),
        Err(TranscriptionError::MissingCredential(_))
    ));
    assert!(matches!(
        engine.transcribe(b"audio").await,
        Err(TranscriptionError::MissingCredential(_))
    ));
}
