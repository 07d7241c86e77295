use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Hint given to the speech-to-text model so clinical vocabulary survives
/// transcription.
const TRANSCRIPTION_PROMPT: &str =
    "Medical consultation between a doctor and a patient. Clinical terminology may appear.";

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    language: String,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAiWhisperEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
            language: language.unwrap_or_else(|| "es".to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    fn ensure_ready(&self) -> Result<(), TranscriptionError> {
        if self.api_key.trim().is_empty() {
            return Err(TranscriptionError::MissingCredential(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }
        Ok(())
    }

    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError> {
        self.ensure_ready()?;

        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio_data.to_vec())
            .file_name("audio.webm")
            .mime_str("audio/webm")
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        // verbose_json keeps the per-segment annotations alongside the text.
        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", self.language.clone())
            .text("prompt", TRANSCRIPTION_PROMPT)
            .text("response_format", "verbose_json")
            .part("file", file_part);

        tracing::debug!(model = %self.model, language = %self.language, "Sending audio to transcription API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("body: {}", e)))?;

        tracing::info!(chars = parsed.text.len(), "Transcription completed");

        Ok(parsed.text.trim().to_string())
    }
}
