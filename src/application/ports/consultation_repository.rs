use async_trait::async_trait;

use crate::domain::{Consultation, ConsultationId};

use super::RepositoryError;

#[async_trait]
pub trait ConsultationRepository: Send + Sync {
    /// Conditional transition pending -> processing. Returns false when the
    /// row is absent or another invocation already claimed it, in which
    /// case the caller must not touch the record.
    async fn claim_pending(&self, id: &ConsultationId) -> Result<bool, RepositoryError>;

    async fn mark_completed(
        &self,
        id: &ConsultationId,
        transcription: &str,
        summary: &str,
    ) -> Result<(), RepositoryError>;

    async fn mark_failed(
        &self,
        id: &ConsultationId,
        error_message: &str,
    ) -> Result<(), RepositoryError>;

    async fn get_by_id(
        &self,
        id: &ConsultationId,
    ) -> Result<Option<Consultation>, RepositoryError>;
}
