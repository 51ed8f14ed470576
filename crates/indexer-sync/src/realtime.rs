use alloy::providers::Provider;
use alloy::rpc::types::Filter;
use indexer_core::{IndexerConfig, IndexerError, Result};
use indexer_processor::EventProcessor;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, error, trace};

use crate::provider::ProviderManager;

/// Blocks fetched per poll at most; keeps single eth_getLogs calls small
const MAX_BLOCKS_PER_POLL: u64 = 10;

/// Follows the chain head by polling for new blocks and pulling the
/// order contract's logs for each new range
pub struct RealtimeSyncer {
    config: IndexerConfig,
    provider: Arc<ProviderManager>,
    processor: Arc<EventProcessor>,
    poll_interval: Duration,
}

impl RealtimeSyncer {
    pub fn new(
        config: IndexerConfig,
        provider: Arc<ProviderManager>,
        processor: Arc<EventProcessor>,
    ) -> Self {
        let poll_interval = std::env::var("POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_secs(2));

        Self {
            config,
            provider,
            processor,
            poll_interval,
        }
    }

    /// Run the realtime syncer. Returns only on unrecoverable errors;
    /// transient poll failures are logged and retried on the next tick.
    pub async fn run(&mut self) -> Result<()> {
        let mut ticker = interval(self.poll_interval);

        loop {
            ticker.tick().await;

            match self.poll_new_blocks().await {
                Ok(processed) => {
                    if processed > 0 {
                        trace!(blocks = processed, "Processed new blocks");
                    }
                }
                Err(e) => {
                    error!(error = %e, "Error polling blocks");
                    tokio::time::sleep(Duration::from_secs(5)).await;
                }
            }
        }
    }

    async fn poll_new_blocks(&mut self) -> Result<usize> {
        let current_block = self
            .provider
            .http()
            .get_block_number()
            .await
            .map_err(|e| IndexerError::Rpc(e.to_string()))?;

        let last_synced = {
            let state = self.processor.store().sync_state.read().await;
            state.last_synced_block
        };

        if current_block <= last_synced {
            return Ok(0);
        }

        let from_block = last_synced + 1;
        let to_block = current_block.min(from_block + MAX_BLOCKS_PER_POLL - 1);

        debug!(from = from_block, to = to_block, "Polling new blocks");

        let filter = Filter::new()
            .address(self.config.magenta)
            .from_block(from_block)
            .to_block(to_block);

        let logs = self
            .provider
            .http()
            .get_logs(&filter)
            .await
            .map_err(|e| IndexerError::Rpc(e.to_string()))?;

        for log in logs {
            self.processor.process_log(log).await?;
        }

        {
            let mut state = self.processor.store().sync_state.write().await;
            state.set_last_synced_block(to_block);
        }

        Ok((to_block - from_block + 1) as usize)
    }
}
