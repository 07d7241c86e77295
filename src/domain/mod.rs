mod audio_location;
mod consultation;
mod consultation_status;

pub use audio_location::{AudioLocation, AudioLocationError};
pub use consultation::{Consultation, ConsultationId};
pub use consultation_status::ConsultationStatus;
