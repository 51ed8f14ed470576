use alloy::rpc::types::Log;
use alloy_primitives::U256;
use alloy_sol_types::SolEvent;
use indexer_core::events::{TransferOrderCancelled, TransferOrderCreated, TransferOrderExecuted};
use indexer_core::types::{Interval, TransferOrder};
use indexer_core::{IndexerError, Result};
use indexer_store::MagentaStore;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::handlers::block_meta;

pub struct TransferOrderHandler {
    store: Arc<MagentaStore>,
}

impl TransferOrderHandler {
    pub fn new(store: Arc<MagentaStore>) -> Self {
        Self { store }
    }

    pub async fn handle_created(&self, log: &Log) -> Result<()> {
        let event = TransferOrderCreated::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        let order = TransferOrder {
            actor: event.actor,
            identifier: event.identifier,
            receiver: event.receiver,
            token_in: event.tokenIn,
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
            receiver = ?order.receiver,
            amount_in = %order.amount_in,
            tranches = order.num_of_orders,
            "Transfer order created"
        );

        if let Some(previous) = self.store.transfer_orders.insert(order) {
            warn!(
                identifier = ?previous.identifier,
                "Duplicate TransferOrderCreated replaced an existing record"
            );
        }

        let mut state = self.store.sync_state.write().await;
        state.record_order();
        state.record_event();

        Ok(())
    }

    pub async fn handle_cancelled(&self, log: &Log) -> Result<()> {
        let event = TransferOrderCancelled::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        let updated = self
            .store
            .transfer_orders
            .update(&event.identifier, |order| order.cancelled = true);

        if updated {
            debug!(identifier = ?event.identifier, "Transfer order cancelled");
        } else {
            debug!(
                identifier = ?event.identifier,
                "TransferOrderCancelled for unknown order, skipping"
            );
        }

        self.store.sync_state.write().await.record_event();

        Ok(())
    }

    pub async fn handle_executed(&self, log: &Log) -> Result<()> {
        let event = TransferOrderExecuted::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        // Same draining rule as DCA: complete only at zero balance
        let remaining = event.amountInBalance;
        let updated = self
            .store
            .transfer_orders
            .update(&event.identifier, |order| {
                order.amount_in_balance = remaining;
                order.executed = remaining.is_zero();
            });

        if updated {
            debug!(
                identifier = ?event.identifier,
                remaining = %remaining,
                complete = remaining.is_zero(),
                "Transfer order executed"
            );
        } else {
            debug!(
                identifier = ?event.identifier,
                "TransferOrderExecuted for unknown order, skipping"
            );
        }

        self.store.sync_state.write().await.record_event();

        Ok(())
    }
}
