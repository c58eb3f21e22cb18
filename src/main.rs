use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use paperlens::application::ports::{SummaryRepository, UploadRepository};
use paperlens::application::services::{
    AdmissionPolicy, RetryPolicy, SummaryGenerator, SummaryService,
};
use paperlens::infrastructure::llm::create_llm_client;
use paperlens::infrastructure::observability::{TracingConfig, init_tracing};
use paperlens::infrastructure::persistence::{
    InMemorySummaryRepository, InMemoryUploadRepository, PgSummaryRepository,
    PgUploadRepository, create_pool, run_migrations,
};
use paperlens::infrastructure::storage::BlobStoreFactory;
use paperlens::infrastructure::text_processing::PdfAdapter;
use paperlens::presentation::config::DatabaseProvider;
use paperlens::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.enable_json,
        settings.logging.level.as_deref(),
    ));

    let (uploads, summaries): (Arc<dyn UploadRepository>, Arc<dyn SummaryRepository>) =
        match settings.database.provider {
            DatabaseProvider::Postgres => {
                let pool =
                    create_pool(&settings.database.url, settings.database.max_connections).await?;
                if settings.database.run_migrations {
                    run_migrations(&pool).await?;
                }
                (
                    Arc::new(PgUploadRepository::new(pool.clone())),
                    Arc::new(PgSummaryRepository::new(pool)),
                )
            }
            DatabaseProvider::Memory => {
                tracing::warn!("Using in-memory repositories; data is lost on restart");
                (
                    Arc::new(InMemoryUploadRepository::new()),
                    Arc::new(InMemorySummaryRepository::new()),
                )
            }
        };

    let blob_store = BlobStoreFactory::create(&settings.storage)?;
    let llm_client = create_llm_client(&settings.llm)?;
    let text_extractor = Arc::new(PdfAdapter::with_timeout(Duration::from_secs(
        settings.summary.extraction_timeout_secs,
    )));

    let generator = SummaryGenerator::new(
        llm_client,
        RetryPolicy {
            max_retries: settings.summary.max_retries,
            delay: Duration::from_millis(settings.summary.retry_delay_ms),
        },
        settings.llm.max_tokens,
        settings.llm.temperature,
    );
    let admission = AdmissionPolicy::new(
        settings.summary.max_pdf_size_mb,
        settings.summary.max_text_length,
    );

    let mut summary_service = SummaryService::new(
        Arc::clone(&uploads),
        Arc::clone(&summaries),
        Arc::clone(&blob_store),
        text_extractor,
        generator,
        admission,
    );
    if !settings.summary.single_flight {
        summary_service = summary_service.without_single_flight();
    }

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;

    let state = AppState {
        summary_service: Arc::new(summary_service),
        uploads,
        summaries,
        blob_store,
        settings,
    };

    let router = create_router(state);

    tracing::info!(%addr, "Listening");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
