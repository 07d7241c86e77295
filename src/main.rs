use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use mediscribe::application::ports::ConsultationRepository;
use mediscribe::application::services::ProcessingService;
use mediscribe::infrastructure::audio::OpenAiWhisperEngine;
use mediscribe::infrastructure::llm::OpenAiSummarizer;
use mediscribe::infrastructure::observability::{init_tracing, TracingConfig};
use mediscribe::infrastructure::persistence::{create_pool, PgConsultationRepository};
use mediscribe::infrastructure::storage::AudioStoreFactory;
use mediscribe::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let pool = create_pool(&settings.database.url, settings.database.max_connections)
        .await
        .map_err(|e| anyhow::anyhow!("database pool: {}", e))?;

    let repository: Arc<dyn ConsultationRepository> =
        Arc::new(PgConsultationRepository::new(pool));

    let audio_store = AudioStoreFactory::create(&settings.storage)
        .map_err(|e| anyhow::anyhow!("audio store: {}", e))?;

    let transcription_engine = Arc::new(OpenAiWhisperEngine::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.whisper_model.clone()),
        Some(settings.openai.language.clone()),
    ));

    let summarizer = Arc::new(OpenAiSummarizer::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.chat_model.clone()),
        settings.openai.temperature,
    ));

    let processing_service = Arc::new(ProcessingService::new(
        audio_store,
        transcription_engine,
        summarizer,
        Arc::clone(&repository),
    ));

    let state = AppState {
        processing_service,
        consultation_repository: repository,
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
