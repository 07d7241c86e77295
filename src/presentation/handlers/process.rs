use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::ConsultationId;
use crate::presentation::state::AppState;

/// Row-insert notification fired by the surrounding application when a
/// consultation with an uploaded recording is created.
#[derive(Deserialize)]
pub struct TriggerPayload {
    #[serde(default)]
    pub record: Option<TriggerRecord>,
}

#[derive(Deserialize)]
pub struct TriggerRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

#[derive(Serialize)]
pub struct ProcessResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts the trigger event and dispatches the pipeline as a detached
/// task. The response only acknowledges dispatch; the outcome is observable
/// by polling the consultation record.
#[tracing::instrument(skip(state, payload))]
pub async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<TriggerPayload>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected malformed trigger payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid JSON body: {}", e),
                }),
            )
                .into_response();
        }
    };

    let record = match payload.record {
        Some(r) => r,
        None => {
            tracing::warn!("Trigger payload missing record");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing record in trigger payload".to_string(),
                }),
            )
                .into_response();
        }
    };

    let id = match record.id.filter(|s| !s.trim().is_empty()) {
        Some(id) => id,
        None => {
            tracing::warn!("Trigger payload missing record.id");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing record.id in trigger payload".to_string(),
                }),
            )
                .into_response();
        }
    };

    let audio_url = match record.audio_url.filter(|s| !s.trim().is_empty()) {
        Some(url) => url,
        None => {
            tracing::warn!(consultation_id = %id, "Trigger payload missing record.audio_url");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing record.audio_url in trigger payload".to_string(),
                }),
            )
                .into_response();
        }
    };

    let consultation_id = ConsultationId::new(id);
    tracing::info!(consultation_id = %consultation_id, "Consultation processing dispatched");

    let service = Arc::clone(&state.processing_service);
    tokio::spawn(async move {
        if let Err(e) = service.process(consultation_id, audio_url).await {
            tracing::error!(error = %e, "Detached consultation pipeline failed");
        }
    });

    (
        StatusCode::ACCEPTED,
        Json(ProcessResponse {
            message: "Consultation processing started".to_string(),
        }),
    )
        .into_response()
}
