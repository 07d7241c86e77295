use async_trait::async_trait;

/// Produces a structured clinical note from a raw transcript.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript: &str) -> Result<String, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
