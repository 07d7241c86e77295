use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{ConsultationRepository, RepositoryError};
use crate::domain::{Consultation, ConsultationId, ConsultationStatus};

pub struct PgConsultationRepository {
    pool: PgPool,
}

impl PgConsultationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_consultation(row: &PgRow) -> Result<Consultation, RepositoryError> {
        let status_str: String = row
            .try_get("status")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let status = status_str
            .parse::<ConsultationStatus>()
            .map_err(RepositoryError::QueryFailed)?;

        let id: String = row
            .try_get("id")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let audio_url: String = row
            .try_get("audio_url")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let transcription: Option<String> = row
            .try_get("transcription")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let summary: Option<String> = row
            .try_get("summary")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let error_message: Option<String> = row
            .try_get("error_message")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let updated_at: DateTime<Utc> = row
            .try_get("updated_at")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(Consultation {
            id: ConsultationId::new(id),
            audio_url,
            status,
            transcription,
            summary,
            error_message,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl ConsultationRepository for PgConsultationRepository {
    #[instrument(skip(self), fields(consultation_id = %id))]
    async fn claim_pending(&self, id: &ConsultationId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE consultations
            SET status = $1, updated_at = $2
            WHERE id = $3 AND status = $4
            "#,
        )
        .bind(ConsultationStatus::Processing.as_str())
        .bind(Utc::now())
        .bind(id.as_str())
        .bind(ConsultationStatus::Pending.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, transcription, summary), fields(consultation_id = %id))]
    async fn mark_completed(
        &self,
        id: &ConsultationId,
        transcription: &str,
        summary: &str,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE consultations
            SET status = $1, transcription = $2, summary = $3,
                error_message = NULL, updated_at = $4
            WHERE id = $5
            "#,
        )
        .bind(ConsultationStatus::Completed.as_str())
        .bind(transcription)
        .bind(summary)
        .bind(Utc::now())
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self, error_message), fields(consultation_id = %id))]
    async fn mark_failed(
        &self,
        id: &ConsultationId,
        error_message: &str,
    ) -> Result<(), RepositoryError> {
        // Transcription and summary keep whatever value they had; only the
        // status and error detail change on the failure path.
        sqlx::query(
            r#"
            UPDATE consultations
            SET status = $1, error_message = $2, updated_at = $3
            WHERE id = $4
            "#,
        )
        .bind(ConsultationStatus::Failed.as_str())
        .bind(error_message)
        .bind(Utc::now())
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(consultation_id = %id))]
    async fn get_by_id(
        &self,
        id: &ConsultationId,
    ) -> Result<Option<Consultation>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, audio_url, status, transcription, summary,
                   error_message, created_at, updated_at
            FROM consultations
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_consultation(&r)?)),
            None => Ok(None),
        }
    }
}
