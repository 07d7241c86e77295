use std::fmt;

use chrono::{DateTime, Utc};

use super::ConsultationStatus;

/// Opaque identifier for a consultation row. The surrounding application
/// mints these; the processor only carries them through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConsultationId(String);

impl ConsultationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConsultationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A clinical encounter record that owns an audio recording and its
/// derived text artifacts.
#[derive(Debug, Clone)]
pub struct Consultation {
    pub id: ConsultationId,
    pub audio_url: String,
    pub status: ConsultationStatus,
    pub transcription: Option<String>,
    pub summary: Option<String>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Consultation {
    pub fn new(id: ConsultationId, audio_url: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            audio_url,
            status: ConsultationStatus::Pending,
            transcription: None,
            summary: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }
}
