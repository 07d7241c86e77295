mod audio_store;
mod consultation_repository;
mod repository_error;
mod summarizer;
mod transcription_engine;

pub use audio_store::{AudioStore, AudioStoreError};
pub use consultation_repository::ConsultationRepository;
pub use repository_error::RepositoryError;
pub use summarizer::{Summarizer, SummarizerError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
