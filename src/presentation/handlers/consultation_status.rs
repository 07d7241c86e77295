use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::domain::ConsultationId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ConsultationStatusResponse {
    pub id: String,
    pub status: String,
    pub transcription: Option<String>,
    pub summary: Option<String>,
    pub error_message: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Poll endpoint: the trigger returns before the pipeline runs, so this is
/// the only way a caller observes the terminal outcome.
#[tracing::instrument(skip(state))]
pub async fn consultation_status_handler(
    State(state): State<AppState>,
    Path(consultation_id): Path<String>,
) -> impl IntoResponse {
    if consultation_id.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid consultation ID".to_string(),
            }),
        )
            .into_response();
    }

    let id = ConsultationId::new(consultation_id.clone());

    match state.consultation_repository.get_by_id(&id).await {
        Ok(Some(consultation)) => {
            let response = ConsultationStatusResponse {
                id: consultation.id.to_string(),
                status: consultation.status.as_str().to_string(),
                transcription: consultation.transcription,
                summary: consultation.summary,
                error_message: consultation.error_message,
                created_at: consultation.created_at.to_rfc3339(),
                updated_at: consultation.updated_at.to_rfc3339(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Consultation not found: {}", consultation_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch consultation");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch consultation: {}", e),
                }),
            )
                .into_response()
        }
    }
}
