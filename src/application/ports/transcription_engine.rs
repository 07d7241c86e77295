use async_trait::async_trait;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Cheap readiness probe, checked before the pipeline touches storage
    /// or the network. Engines backed by a remote API report a missing
    /// credential here.
    fn ensure_ready(&self) -> Result<(), TranscriptionError> {
        Ok(())
    }

    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription credential missing: {0}")]
    MissingCredential(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
