use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Summarizer, SummarizerError};

const SYSTEM_PROMPT: &str = "You are a clinical documentation assistant. Given the transcript \
of a medical consultation, produce a structured clinical note with exactly four sections: \
Subjective, Objective, Assessment, and Plan. Be concise and keep the patient's own wording \
where it matters. Do not invent findings that are not in the transcript.";

pub struct OpenAiSummarizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl OpenAiSummarizer {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        temperature: f32,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "gpt-4o-mini".to_string()),
            temperature,
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<String, SummarizerError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: transcript,
                },
            ],
            temperature: self.temperature,
        };

        tracing::debug!(model = %self.model, chars = transcript.len(), "Requesting clinical summary");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizerError::ApiRequestFailed(format!("request: {}", e)))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SummarizerError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SummarizerError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(format!("body: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| SummarizerError::InvalidResponse("no choices in response".into()))?;

        tracing::info!(chars = content.len(), "Clinical summary generated");

        Ok(content.trim().to_string())
    }
}
