//! Dream Lens server binary.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::EnvFilter;

use dream_lens::adapters::ai::{GroqConfig, GroqProvider};
use dream_lens::adapters::http::{api_router, DreamHandlers};
use dream_lens::adapters::postgres::PostgresDreamRepository;
use dream_lens::application::handlers::dream::{InterpretDreamHandler, SubmitDreamHandler};
use dream_lens::config::AppConfig;
use dream_lens::ports::AiProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // No credential is a handled condition: interpretations fall back to the
    // static response, flagged via usedFallback.
    let provider: Option<Arc<dyn AiProvider>> = match &config.ai.api_key {
        Some(key) if !key.is_empty() => {
            let groq_config = GroqConfig::new(key.clone())
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone())
                .with_timeout(config.ai.timeout());
            Some(Arc::new(GroqProvider::new(groq_config)?))
        }
        _ => {
            tracing::warn!("no model API key configured; all interpretations will use the fallback");
            None
        }
    };

    let repository = Arc::new(PostgresDreamRepository::new(pool));
    let interpret_handler = Arc::new(
        InterpretDreamHandler::new(provider)
            .with_temperature(config.ai.temperature)
            .with_max_tokens(config.ai.max_tokens),
    );
    let submit_handler = Arc::new(SubmitDreamHandler::new(
        interpret_handler.clone(),
        repository,
    ));

    let app = api_router(DreamHandlers::new(interpret_handler, submit_handler)).layer(
        TimeoutLayer::new(Duration::from_secs(config.server.request_timeout_secs)),
    );

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "dream-lens listening");
    axum::serve(listener, app).await?;

    Ok(())
}
