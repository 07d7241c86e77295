mod consultation_status;
mod health;
mod process;

pub use consultation_status::consultation_status_handler;
pub use health::health_handler;
pub use process::process_handler;
