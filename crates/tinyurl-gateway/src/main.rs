use std::sync::Arc;

use clap::Parser;
use tinyurl_gateway::cli::Cli;
use tinyurl_gateway::{App, AppState};
use tinyurl_generator::{RandomGenerator, RandomGeneratorSettings};
use tinyurl_shortener::{ShortenerService, ShortenerSettings};
use tinyurl_storage::InMemoryRepository;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();

    tinyurl_telemetry::init(config.log_format.into())?;

    let generator = RandomGenerator::new(
        RandomGeneratorSettings::builder()
            .length(config.code_length)
            .build(),
    )?;
    let settings = ShortenerSettings::builder()
        .max_attempts(config.max_attempts)
        .build();
    let service = ShortenerService::with_settings(InMemoryRepository::new(), generator, settings)?;
    let state = AppState::new(Arc::new(service), config.public_base_url.clone());

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        public_base_url = %config.public_base_url,
        code_length = config.code_length,
        max_attempts = config.max_attempts,
        "starting gateway server"
    );

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
