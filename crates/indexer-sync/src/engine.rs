use indexer_core::{IndexerConfig, Result};
use indexer_processor::EventProcessor;
use indexer_store::MagentaStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::select;
use tokio::sync::broadcast;
use tracing::{error, info};

use crate::historical::HistoricalSyncer;
use crate::provider::ProviderManager;
use crate::realtime::RealtimeSyncer;

/// Orchestrates the historical backfill followed by realtime following
pub struct SyncEngine {
    config: IndexerConfig,
    provider: Arc<ProviderManager>,
    store: Arc<MagentaStore>,
    processor: Arc<EventProcessor>,
    shutdown_flag: Arc<AtomicBool>,
}

impl SyncEngine {
    pub fn new(config: IndexerConfig, store: Arc<MagentaStore>) -> Result<Self> {
        let provider = Arc::new(ProviderManager::new(&config.rpc_url)?);
        let processor = Arc::new(EventProcessor::new(store.clone(), config.clone()));

        Ok(Self {
            config,
            provider,
            store,
            processor,
            shutdown_flag: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Get reference to the store
    pub fn store(&self) -> &Arc<MagentaStore> {
        &self.store
    }

    /// Get reference to the event processor
    pub fn processor(&self) -> &Arc<EventProcessor> {
        &self.processor
    }

    /// Run the sync engine until shutdown is signalled
    pub async fn run(&mut self, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
        let shutdown_flag = Arc::clone(&self.shutdown_flag);
        let mut shutdown_listener = shutdown.resubscribe();
        tokio::spawn(async move {
            let _ = shutdown_listener.recv().await;
            shutdown_flag.store(true, Ordering::SeqCst);
            info!("Shutdown flag set");
        });

        {
            let mut state = self.store.sync_state.write().await;
            *state = indexer_store::SyncState::new(self.config.start_block);
        }

        // Phase 1: historical backfill
        let historical_syncer = HistoricalSyncer::new(
            self.config.clone(),
            self.provider.clone(),
            self.processor.clone(),
            Arc::clone(&self.shutdown_flag),
        );

        let last_synced = historical_syncer.sync_to_head().await?;

        if self.shutdown_flag.load(Ordering::Relaxed) {
            info!("Shutdown during historical sync, exiting");
            return Ok(());
        }

        {
            let mut state = self.store.sync_state.write().await;
            state.complete_historical_sync();
        }

        {
            let state = self.store.sync_state.read().await;
            info!(
                last_synced = last_synced,
                orders = state.stats.orders_indexed,
                admin_records = state.stats.admin_records,
                events = state.stats.total_events_processed,
                "Historical sync complete, switching to realtime mode"
            );
        }

        // Phase 2: realtime following
        let mut realtime_syncer = RealtimeSyncer::new(
            self.config.clone(),
            self.provider.clone(),
            self.processor.clone(),
        );

        loop {
            select! {
                _ = shutdown.recv() => {
                    info!("Shutdown signal received");
                    break;
                }

                result = realtime_syncer.run() => {
                    match result {
                        Ok(_) => info!("Realtime syncer completed"),
                        Err(e) => {
                            error!(error = %e, "Realtime syncer error");
                            tokio::time::sleep(Duration::from_secs(5)).await;
                        }
                    }
                }
            }
        }

        info!("Sync engine shutdown complete");
        Ok(())
    }

    /// Print current sync status
    pub async fn print_status(&self) {
        let state = self.store.sync_state.read().await;

        info!(
            mode = ?state.mode,
            last_block = state.last_synced_block,
            orders = self.store.order_count(),
            admin_records = self.store.admin_log.count(),
            events = state.stats.total_events_processed,
            "Current status"
        );
    }
}
