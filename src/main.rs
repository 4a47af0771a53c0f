//! Cyclewise HTTP server.

use std::sync::Arc;

use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use cyclewise::adapters::ai::{OpenAIConfig, OpenAIProvider};
use cyclewise::adapters::http::{app_router, cors_layer, AppState};
use cyclewise::adapters::insight::{AIInsightService, DisabledInsightService};
use cyclewise::adapters::storage::{FileHealthStore, InMemoryHealthStore};
use cyclewise::config::{AiConfig, AppConfig, StorageBackend, StorageConfig};
use cyclewise::ports::{HealthStore, InsightService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config);

    let store = build_store(&config.storage);
    let insights = build_insight_service(&config.ai)?;

    let state = AppState::new(
        store,
        insights,
        config.tracking.aggregator(),
        config.ai.timeout(),
    );

    let app = app_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server.cors_origins_list()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        storage = ?config.storage.backend,
        ai_enabled = config.ai.is_enabled(),
        "Cyclewise listening"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_store(config: &StorageConfig) -> Arc<dyn HealthStore> {
    match config.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on restart");
            Arc::new(InMemoryHealthStore::new())
        }
        StorageBackend::File => {
            info!(data_dir = %config.data_dir.display(), "Using file storage");
            Arc::new(FileHealthStore::new(&config.data_dir))
        }
    }
}

fn build_insight_service(config: &AiConfig) -> Result<Arc<dyn InsightService>, Box<dyn std::error::Error>> {
    let Some(api_key) = config.api_key() else {
        warn!("No AI API key configured; insights will use static fallbacks");
        return Ok(Arc::new(DisabledInsightService));
    };

    let provider = OpenAIProvider::new(
        OpenAIConfig::new(api_key)
            .with_base_url(config.base_url.clone())
            .with_model(config.model.clone())
            .with_timeout(config.attempt_timeout())
            .with_max_retries(config.max_retries),
    )?;

    Ok(Arc::new(AIInsightService::new(Arc::new(provider))))
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
