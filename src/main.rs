use indexer_api::{ApiConfig, ApiServer};
use indexer_core::IndexerConfig;
use indexer_store::MagentaStore;
use indexer_sync::SyncEngine;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("indexer_sync=info".parse()?)
                .add_directive("indexer_processor=info".parse()?),
        )
        .init();

    info!("Magenta indexer starting...");

    let config = match IndexerConfig::load() {
        Ok(config) => {
            info!(
                chain_id = config.chain_id,
                magenta = ?config.magenta,
                start_block = config.start_block,
                "Configuration loaded from deployment"
            );
            config
        }
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let store = Arc::new(MagentaStore::new());

    let mut engine = match SyncEngine::new(config.clone(), store.clone()) {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "Failed to create sync engine");
            std::process::exit(1);
        }
    };

    // Setup shutdown signal
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

    let shutdown_tx_clone = shutdown_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Shutdown signal received (Ctrl+C)");
        shutdown_tx_clone.send(()).ok();
    });

    // Start GraphQL API server
    let api_config = ApiConfig::from_env();
    let api_server = ApiServer::new(api_config, store.clone());
    tokio::spawn(async move {
        if let Err(e) = api_server.run().await {
            error!(error = %e, "API server error");
        }
    });
    info!("GraphQL API server started");

    // Spawn status printer
    let store_clone = store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(30));
        loop {
            interval.tick().await;
            let state = store_clone.sync_state.read().await;
            info!(
                mode = ?state.mode,
                last_block = state.last_synced_block,
                orders = store_clone.order_count(),
                admin_records = store_clone.admin_log.count(),
                events = state.stats.total_events_processed,
                "Status"
            );
        }
    });

    // Run sync engine
    if let Err(e) = engine.run(shutdown_rx).await {
        error!(error = %e, "Sync engine error");
        std::process::exit(1);
    }

    info!("Indexer shut down");
    Ok(())
}
