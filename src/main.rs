use anyhow::{Context, Result};
use std::sync::Arc;
use sync_server::config::KafkaConfig;
use sync_server::consumers::SyncEventConsumer;
use sync_server::services::LoggingDispatcher;
use tokio::sync::watch;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sync_server=debug".into()),
        )
        .init();

    info!("Sync server is starting");

    dotenvy::dotenv().ok();
    let config = KafkaConfig::from_env();

    // Ctrl+C triggers graceful shutdown of the consume loop.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let dispatcher = Arc::new(LoggingDispatcher);
    let consumer = SyncEventConsumer::new(&config, dispatcher, shutdown_rx)
        .context("Failed to create sync consumer")?;

    consumer.run().await.context("Sync consumer failed")?;

    info!("Sync server stopped");
    Ok(())
}
