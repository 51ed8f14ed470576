use alloy::rpc::types::Log;
use alloy_sol_types::SolEvent;
use indexer_core::events::{LimitOrdeCancelled, LimitOrderCreated, LimitOrderExecuted};
use indexer_core::types::LimitOrder;
use indexer_core::{IndexerError, Result};
use indexer_store::MagentaStore;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::handlers::block_meta;

pub struct LimitOrderHandler {
    store: Arc<MagentaStore>,
}

impl LimitOrderHandler {
    pub fn new(store: Arc<MagentaStore>) -> Self {
        Self { store }
    }

    pub async fn handle_created(&self, log: &Log) -> Result<()> {
        let event = LimitOrderCreated::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        let order = LimitOrder {
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
            amount_out_min = %order.amount_out_min,
            "Limit order created"
        );

        if let Some(previous) = self.store.limit_orders.insert(order) {
            warn!(
                identifier = ?previous.identifier,
                "Duplicate LimitOrderCreated replaced an existing record"
            );
        }

        let mut state = self.store.sync_state.write().await;
        state.record_order();
        state.record_event();

        Ok(())
    }

    pub async fn handle_cancelled(&self, log: &Log) -> Result<()> {
        let event = LimitOrdeCancelled::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        let updated = self
            .store
            .limit_orders
            .update(&event.identifier, |order| order.cancelled = true);

        if updated {
            debug!(identifier = ?event.identifier, "Limit order cancelled");
        } else {
            debug!(
                identifier = ?event.identifier,
                "LimitOrdeCancelled for unknown order, skipping"
            );
        }

        self.store.sync_state.write().await.record_event();

        Ok(())
    }

    pub async fn handle_executed(&self, log: &Log) -> Result<()> {
        let event = LimitOrderExecuted::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        let updated = self
            .store
            .limit_orders
            .update(&event.identifier, |order| order.executed = true);

        if updated {
            debug!(identifier = ?event.identifier, "Limit order executed");
        } else {
            debug!(
                identifier = ?event.identifier,
                "LimitOrderExecuted for unknown order, skipping"
            );
        }

        self.store.sync_state.write().await.record_event();

        Ok(())
    }
}
