use alloy::providers::Provider;
use alloy::rpc::types::{Filter, Log};
use indexer_core::{IndexerConfig, IndexerError, Result};
use indexer_processor::EventProcessor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::provider::ProviderManager;

/// Backfills the order contract's logs from the deployment block to the
/// chain head using batched eth_getLogs requests
pub struct HistoricalSyncer {
    config: IndexerConfig,
    provider: Arc<ProviderManager>,
    processor: Arc<EventProcessor>,
    /// Shutdown flag, checked between batches for graceful termination
    shutdown: Arc<AtomicBool>,
}

impl HistoricalSyncer {
    pub fn new(
        config: IndexerConfig,
        provider: Arc<ProviderManager>,
        processor: Arc<EventProcessor>,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        Self {
            config,
            provider,
            processor,
            shutdown,
        }
    }

    fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
    }

    /// Sync from start_block to the current head.
    /// Returns the last synced block number.
    pub async fn sync_to_head(&self) -> Result<u64> {
        if self.is_shutdown() {
            let state = self.processor.store().sync_state.read().await;
            return Ok(state.last_synced_block);
        }

        let start_block = self.config.start_block;
        let target = self.get_head().await?;

        info!(
            start = start_block,
            end = target,
            total = target.saturating_sub(start_block),
            "Starting historical sync"
        );

        self.sync_range(start_block, target).await?;

        // Blocks keep arriving while we backfill; loop until caught up
        loop {
            if self.is_shutdown() {
                info!("Historical sync interrupted by shutdown");
                break;
            }

            let head = self.get_head().await?;
            let last_synced = {
                let state = self.processor.store().sync_state.read().await;
                state.last_synced_block
            };

            if last_synced >= head {
                info!(
                    last_synced = last_synced,
                    orders = self.processor.store().order_count(),
                    admin_records = self.processor.store().admin_log.count(),
                    "Historical sync complete"
                );
                break;
            }

            debug!(from = last_synced + 1, to = head, "Catching up new blocks");
            self.sync_range(last_synced + 1, head).await?;
        }

        let state = self.processor.store().sync_state.read().await;
        Ok(state.last_synced_block)
    }

    async fn get_head(&self) -> Result<u64> {
        self.provider
            .http()
            .get_block_number()
            .await
            .map_err(|e| IndexerError::Rpc(e.to_string()))
    }

    async fn sync_range(&self, from: u64, to: u64) -> Result<()> {
        let batch_size = self.config.sync.batch_size.max(1);
        let mut batch_start = from;

        while batch_start <= to {
            if self.is_shutdown() {
                return Ok(());
            }

            let batch_end = (batch_start + batch_size - 1).min(to);

            let logs = self.fetch_batch_with_retry(batch_start, batch_end).await?;
            if !logs.is_empty() {
                debug!(
                    from = batch_start,
                    to = batch_end,
                    logs = logs.len(),
                    "Processing batch"
                );
            }

            for log in logs {
                self.processor.process_log(log).await?;
            }

            {
                let mut state = self.processor.store().sync_state.write().await;
                state.set_last_synced_block(batch_end);
            }

            batch_start = batch_end + 1;
        }

        Ok(())
    }

    async fn fetch_batch_with_retry(&self, from: u64, to: u64) -> Result<Vec<Log>> {
        let filter = Filter::new()
            .address(self.config.magenta)
            .from_block(from)
            .to_block(to);

        let mut attempt = 0;
        loop {
            match self.provider.http().get_logs(&filter).await {
                Ok(logs) => return Ok(logs),
                Err(e) => {
                    attempt += 1;
                    if attempt >= self.config.sync.retry_attempts {
                        return Err(IndexerError::Rpc(e.to_string()));
                    }
                    warn!(
                        from = from,
                        to = to,
                        attempt = attempt,
                        error = %e,
                        "eth_getLogs failed, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(self.config.sync.retry_delay_ms))
                        .await;
                }
            }
        }
    }
}
