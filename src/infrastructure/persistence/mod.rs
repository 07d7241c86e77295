mod pg_consultation_repository;
mod pg_pool;

pub use pg_consultation_repository::PgConsultationRepository;
pub use pg_pool::create_pool;
