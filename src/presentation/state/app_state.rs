use std::sync::Arc;

use crate::application::ports::ConsultationRepository;
use crate::application::services::ProcessingService;

#[derive(Clone)]
pub struct AppState {
    pub processing_service: Arc<ProcessingService>,
    pub consultation_repository: Arc<dyn ConsultationRepository>,
}
