use alloy::rpc::types::Log;
use alloy_sol_types::SolEvent;
use indexer_core::events::{SwapOrderCancelled, SwapOrderCreated, SwapOrderExecuted};
use indexer_core::types::SwapOrder;
use indexer_core::{IndexerError, Result};
use indexer_store::MagentaStore;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::handlers::block_meta;

pub struct SwapOrderHandler {
    store: Arc<MagentaStore>,
}

impl SwapOrderHandler {
    pub fn new(store: Arc<MagentaStore>) -> Self {
        Self { store }
    }

    pub async fn handle_created(&self, log: &Log) -> Result<()> {
        let event = SwapOrderCreated::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        let order = SwapOrder {
            actor: event.actor,
            identifier: event.identifier,
            token_in: event.tokenIn,
            token_out: event.tokenOut,
            amount_in: event.amountIn,
            amount_out_min: event.amountOutMin,
            start_delay: event.startDelay.to::<u64>(),
            deadline: event.deadline.to::<u64>(),
            executed: false,
            cancelled: false,
            meta: block_meta(log),
        };

        debug!(
            identifier = ?order.identifier,
            actor = ?order.actor,
            amount_in = %order.amount_in,
            "Swap order created"
        );

        if let Some(previous) = self.store.swap_orders.insert(order) {
            warn!(
                identifier = ?previous.identifier,
                "Duplicate SwapOrderCreated replaced an existing record"
            );
        }

        let mut state = self.store.sync_state.write().await;
        state.record_order();
        state.record_event();

        Ok(())
    }

    pub async fn handle_cancelled(&self, log: &Log) -> Result<()> {
        let event = SwapOrderCancelled::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        // Unknown identifiers are skipped, never fabricated
        let updated = self
            .store
            .swap_orders
            .update(&event.identifier, |order| order.cancelled = true);

        if updated {
            debug!(identifier = ?event.identifier, "Swap order cancelled");
        } else {
            debug!(
                identifier = ?event.identifier,
                "SwapOrderCancelled for unknown order, skipping"
            );
        }

        self.store.sync_state.write().await.record_event();

        Ok(())
    }

    pub async fn handle_executed(&self, log: &Log) -> Result<()> {
        let event = SwapOrderExecuted::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        let updated = self
            .store
            .swap_orders
            .update(&event.identifier, |order| order.executed = true);

        if updated {
            debug!(identifier = ?event.identifier, "Swap order executed");
        } else {
            debug!(
                identifier = ?event.identifier,
                "SwapOrderExecuted for unknown order, skipping"
            );
        }

        self.store.sync_state.write().await.record_event();

        Ok(())
    }
}
