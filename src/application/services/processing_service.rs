use std::sync::Arc;

use crate::application::ports::{
    AudioStore, AudioStoreError, ConsultationRepository, RepositoryError, Summarizer,
    TranscriptionEngine, TranscriptionError,
};
use crate::domain::{AudioLocation, AudioLocationError, ConsultationId};

/// Fallback note recorded when summarization fails. Summarization is
/// best-effort: a consultation with a transcript still finalizes.
pub const SUMMARY_UNAVAILABLE: &str =
    "Automatic summary unavailable. Please review the transcription.";

/// Sequential consultation pipeline: claim the row, download the recording,
/// transcribe it, summarize the transcript, persist one terminal outcome.
/// Nothing is retried; every failure after the claim is terminal for the
/// invocation and surfaced only through the consultation row.
pub struct ProcessingService {
    audio_store: Arc<dyn AudioStore>,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    summarizer: Arc<dyn Summarizer>,
    repository: Arc<dyn ConsultationRepository>,
}

impl ProcessingService {
    pub fn new(
        audio_store: Arc<dyn AudioStore>,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        summarizer: Arc<dyn Summarizer>,
        repository: Arc<dyn ConsultationRepository>,
    ) -> Self {
        Self {
            audio_store,
            transcription_engine,
            summarizer,
            repository,
        }
    }

    #[tracing::instrument(name = "consultation_pipeline", skip_all, fields(consultation_id = %id))]
    pub async fn process(
        &self,
        id: ConsultationId,
        audio_url: String,
    ) -> Result<(), ProcessingError> {
        let claimed = self
            .repository
            .claim_pending(&id)
            .await
            .map_err(ProcessingError::Repository)?;

        if !claimed {
            tracing::warn!("Consultation not pending, skipping invocation");
            return Ok(());
        }

        let result = self.run_pipeline(&audio_url).await;

        match result {
            Ok((transcription, summary)) => {
                self.repository
                    .mark_completed(&id, &transcription, &summary)
                    .await
                    .map_err(ProcessingError::Repository)?;
                tracing::info!(
                    transcript_chars = transcription.len(),
                    "Consultation processing completed"
                );
                Ok(())
            }
            Err(e) => {
                let error_msg = e.to_string();
                tracing::error!(error = %error_msg, "Consultation processing failed");
                self.repository
                    .mark_failed(&id, &error_msg)
                    .await
                    .map_err(ProcessingError::Repository)?;
                Err(e)
            }
        }
    }

    async fn run_pipeline(&self, audio_url: &str) -> Result<(String, String), ProcessingError> {
        // Credential check first: a misconfigured engine must fail before
        // any storage or network call.
        self.transcription_engine
            .ensure_ready()
            .map_err(ProcessingError::Transcription)?;

        let location =
            AudioLocation::parse(audio_url).map_err(ProcessingError::InvalidAudioReference)?;

        tracing::debug!(bucket = %location.bucket(), path = %location.object_path(), "Fetching recording");

        let audio_data = self
            .audio_store
            .fetch(&location)
            .await
            .map_err(ProcessingError::AudioFetch)?;

        tracing::debug!(bytes = audio_data.len(), "Recording downloaded, transcribing");

        let transcription = self
            .transcription_engine
            .transcribe(&audio_data)
            .await
            .map_err(ProcessingError::Transcription)?;

        let summary = match self.summarizer.summarize(&transcription).await {
            Ok(s) if !s.trim().is_empty() => s,
            Ok(_) => {
                tracing::warn!("Summarizer returned empty output, using fallback note");
                SUMMARY_UNAVAILABLE.to_string()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Summarization failed, using fallback note");
                SUMMARY_UNAVAILABLE.to_string()
            }
        };

        Ok((transcription, summary))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("invalid audio reference: {0}")]
    InvalidAudioReference(AudioLocationError),
    #[error("audio fetch: {0}")]
    AudioFetch(AudioStoreError),
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
    #[error("repository: {0}")]
    Repository(RepositoryError),
}
