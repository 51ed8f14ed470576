use alloy::rpc::types::Log;
use alloy_primitives::U256;
use alloy_sol_types::SolEvent;
use indexer_core::events::{DCAOrderCancelled, DCAOrderCreated, DCAOrderExecuted};
use indexer_core::types::{DcaOrder, Interval};
use indexer_core::{IndexerError, Result};
use indexer_store::MagentaStore;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::handlers::block_meta;

pub struct DcaOrderHandler {
    store: Arc<MagentaStore>,
}

impl DcaOrderHandler {
    pub fn new(store: Arc<MagentaStore>) -> Self {
        Self { store }
    }

    pub async fn handle_created(&self, log: &Log) -> Result<()> {
        let event = DCAOrderCreated::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        // The funding balance is reported by Executed events, not here
        let order = DcaOrder {
            actor: event.actor,
            identifier: event.identifier,
            token_in: event.tokenIn,
            token_out: event.tokenOut,
            amount_in: event.amountIn,
            start_delay: event.startDelay.to::<u64>(),
            num_of_orders: event.numOfOrders.to::<u64>(),
            amount_in_balance: U256::ZERO,
            interval: Interval::new(event.iMinutes, event.iHours),
            executed: false,
            cancelled: false,
            meta: block_meta(log),
        };

        debug!(
            identifier = ?order.identifier,
            actor = ?order.actor,
            amount_in = %order.amount_in,
            tranches = order.num_of_orders,
            interval_minutes = order.interval.as_minutes(),
            "DCA order created"
        );

        if let Some(previous) = self.store.dca_orders.insert(order) {
            warn!(
                identifier = ?previous.identifier,
                "Duplicate DCAOrderCreated replaced an existing record"
            );
        }

        let mut state = self.store.sync_state.write().await;
        state.record_order();
        state.record_event();

        Ok(())
    }

    pub async fn handle_cancelled(&self, log: &Log) -> Result<()> {
        let event = DCAOrderCancelled::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        let updated = self
            .store
            .dca_orders
            .update(&event.identifier, |order| order.cancelled = true);

        if updated {
            debug!(identifier = ?event.identifier, "DCA order cancelled");
        } else {
            debug!(
                identifier = ?event.identifier,
                "DCAOrderCancelled for unknown order, skipping"
            );
        }

        self.store.sync_state.write().await.record_event();

        Ok(())
    }

    pub async fn handle_executed(&self, log: &Log) -> Result<()> {
        let event = DCAOrderExecuted::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        // A recurring order completes only once its funding balance is
        // fully drawn down
        let remaining = event.amountInBalance;
        let updated = self.store.dca_orders.update(&event.identifier, |order| {
            order.amount_in_balance = remaining;
            order.executed = remaining.is_zero();
        });

        if updated {
            debug!(
                identifier = ?event.identifier,
                remaining = %remaining,
                complete = remaining.is_zero(),
                "DCA order executed"
            );
        } else {
            debug!(
                identifier = ?event.identifier,
                "DCAOrderExecuted for unknown order, skipping"
            );
        }

        self.store.sync_state.write().await.record_event();

        Ok(())
    }
}
