use alloy::rpc::types::Log;
use alloy_sol_types::SolEvent;
use indexer_core::events::{
    DCAOrderCancelled, DCAOrderCreated, DCAOrderExecuted, LimitOrdeCancelled, LimitOrderCreated,
    LimitOrderExecuted, Paused, RoleAdminChanged, RoleGranted, RoleRevoked, SwapOrderCancelled,
    SwapOrderCreated, SwapOrderExecuted, TransferOrderCancelled, TransferOrderCreated,
    TransferOrderExecuted, Unpaused,
};
use indexer_core::{IndexerConfig, Result};
use indexer_store::MagentaStore;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::handlers::{
    AdminEventHandler, DcaOrderHandler, LimitOrderHandler, SwapOrderHandler, TransferOrderHandler,
};

/// Routes decoded contract logs to the handler for their event type.
///
/// Invoked one log at a time, in block order; ordering and delivery
/// guarantees belong to the sync runtime, not this layer.
pub struct EventProcessor {
    store: Arc<MagentaStore>,
    config: IndexerConfig,

    swap_orders: SwapOrderHandler,
    limit_orders: LimitOrderHandler,
    dca_orders: DcaOrderHandler,
    transfer_orders: TransferOrderHandler,
    admin_events: AdminEventHandler,
}

impl EventProcessor {
    pub fn new(store: Arc<MagentaStore>, config: IndexerConfig) -> Self {
        Self {
            store: store.clone(),
            config,
            swap_orders: SwapOrderHandler::new(store.clone()),
            limit_orders: LimitOrderHandler::new(store.clone()),
            dca_orders: DcaOrderHandler::new(store.clone()),
            transfer_orders: TransferOrderHandler::new(store.clone()),
            admin_events: AdminEventHandler::new(store),
        }
    }

    /// Get reference to the store
    pub fn store(&self) -> &Arc<MagentaStore> {
        &self.store
    }

    /// Get reference to config
    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Check if a log was emitted by the order contract
    pub fn is_relevant_log(&self, log: &Log) -> bool {
        log.address() == self.config.magenta
    }

    /// Process a single log, routing to the appropriate handler
    pub async fn process_log(&self, log: Log) -> Result<()> {
        let topic0 = match log.topics().first() {
            Some(t) => *t,
            None => {
                trace!("Skipping log without topic0");
                return Ok(());
            }
        };

        debug!(
            block = log.block_number.unwrap_or_default(),
            log_index = log.log_index.unwrap_or_default(),
            topic0 = ?topic0,
            "Processing log event"
        );

        match topic0 {
            sig if sig == SwapOrderCreated::SIGNATURE_HASH => {
                self.swap_orders.handle_created(&log).await
            }
            sig if sig == SwapOrderCancelled::SIGNATURE_HASH => {
                self.swap_orders.handle_cancelled(&log).await
            }
            sig if sig == SwapOrderExecuted::SIGNATURE_HASH => {
                self.swap_orders.handle_executed(&log).await
            }
            sig if sig == LimitOrderCreated::SIGNATURE_HASH => {
                self.limit_orders.handle_created(&log).await
            }
            sig if sig == LimitOrdeCancelled::SIGNATURE_HASH => {
                self.limit_orders.handle_cancelled(&log).await
            }
            sig if sig == LimitOrderExecuted::SIGNATURE_HASH => {
                self.limit_orders.handle_executed(&log).await
            }
            sig if sig == DCAOrderCreated::SIGNATURE_HASH => {
                self.dca_orders.handle_created(&log).await
            }
            sig if sig == DCAOrderCancelled::SIGNATURE_HASH => {
                self.dca_orders.handle_cancelled(&log).await
            }
            sig if sig == DCAOrderExecuted::SIGNATURE_HASH => {
                self.dca_orders.handle_executed(&log).await
            }
            sig if sig == TransferOrderCreated::SIGNATURE_HASH => {
                self.transfer_orders.handle_created(&log).await
            }
            sig if sig == TransferOrderCancelled::SIGNATURE_HASH => {
                self.transfer_orders.handle_cancelled(&log).await
            }
            sig if sig == TransferOrderExecuted::SIGNATURE_HASH => {
                self.transfer_orders.handle_executed(&log).await
            }
            sig if sig == Paused::SIGNATURE_HASH => self.admin_events.handle_paused(&log).await,
            sig if sig == Unpaused::SIGNATURE_HASH => {
                self.admin_events.handle_unpaused(&log).await
            }
            sig if sig == RoleGranted::SIGNATURE_HASH => {
                self.admin_events.handle_role_granted(&log).await
            }
            sig if sig == RoleRevoked::SIGNATURE_HASH => {
                self.admin_events.handle_role_revoked(&log).await
            }
            sig if sig == RoleAdminChanged::SIGNATURE_HASH => {
                self.admin_events.handle_role_admin_changed(&log).await
            }
            _ => {
                trace!(topic0 = ?topic0, "Skipping unrecognized event");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, B256, U256};
    use indexer_core::config::SyncConfig;

    fn magenta() -> Address {
        Address::repeat_byte(0x31)
    }

    fn test_config() -> IndexerConfig {
        IndexerConfig {
            chain_id: 8453,
            rpc_url: "http://localhost:8545".to_string(),
            magenta: magenta(),
            start_block: 1,
            sync: SyncConfig {
                retry_attempts: 1,
                retry_delay_ms: 1,
                batch_size: 100,
            },
        }
    }

    fn processor() -> EventProcessor {
        EventProcessor::new(Arc::new(MagentaStore::new()), test_config())
    }

    fn log_for<E: SolEvent>(event: &E, block: u64, timestamp: u64, log_index: u64) -> Log {
        Log {
            inner: alloy_primitives::Log {
                address: magenta(),
                data: event.encode_log_data(),
            },
            block_number: Some(block),
            block_timestamp: Some(timestamp),
            transaction_hash: Some(B256::repeat_byte(block as u8)),
            log_index: Some(log_index),
            ..Default::default()
        }
    }

    fn actor() -> Address {
        Address::repeat_byte(0x01)
    }

    fn swap_created(identifier: B256, amount_in: u64) -> SwapOrderCreated {
        SwapOrderCreated {
            actor: actor(),
            identifier,
            tokenIn: Address::repeat_byte(0x11),
            tokenOut: Address::repeat_byte(0x02),
            amountIn: U256::from(amount_in),
            amountOutMin: U256::from(amount_in / 2),
            startDelay: U256::from(300u64),
            deadline: U256::from(1_700_000_000u64),
        }
    }

    fn dca_created(identifier: B256, amount_in: u64, num_of_orders: u64) -> DCAOrderCreated {
        DCAOrderCreated {
            actor: actor(),
            identifier,
            tokenIn: Address::repeat_byte(0x03),
            tokenOut: Address::repeat_byte(0x04),
            amountIn: U256::from(amount_in),
            startDelay: U256::ZERO,
            numOfOrders: U256::from(num_of_orders),
            iMinutes: 4,
            iHours: 0,
        }
    }

    #[tokio::test]
    async fn swap_created_record_starts_open() {
        let processor = processor();
        let id = B256::repeat_byte(0xaa);

        processor
            .process_log(log_for(&swap_created(id, 1000), 10, 5000, 0))
            .await
            .unwrap();

        let order = processor.store().swap_orders.get(&id).unwrap();
        assert!(!order.executed);
        assert!(!order.cancelled);
        assert_eq!(order.amount_in, U256::from(1000u64));
        assert_eq!(order.start_delay, 300);
        assert_eq!(order.meta.block_number, 10);
        assert_eq!(order.meta.block_timestamp, 5000);
    }

    #[tokio::test]
    async fn cancel_preserves_other_fields() {
        // Created -> queried via actor -> Cancelled -> amountIn unchanged
        let processor = processor();
        let id = B256::repeat_byte(0xaa);

        processor
            .process_log(log_for(&swap_created(id, 1000), 10, 5000, 0))
            .await
            .unwrap();

        let by_actor = processor.store().swap_orders.recent_by_actor(&actor(), 15);
        assert_eq!(by_actor.len(), 1);
        assert_eq!(by_actor[0].amount_in, U256::from(1000u64));

        processor
            .process_log(log_for(&SwapOrderCancelled { identifier: id }, 11, 5010, 0))
            .await
            .unwrap();

        let order = processor.store().swap_orders.get(&id).unwrap();
        assert!(order.cancelled);
        assert!(!order.executed);
        assert_eq!(order.amount_in, U256::from(1000u64));
    }

    #[tokio::test]
    async fn mutating_unknown_identifier_leaves_store_unchanged() {
        let processor = processor();
        let unknown = B256::repeat_byte(0xee);

        processor
            .process_log(log_for(&SwapOrderCancelled { identifier: unknown }, 5, 100, 0))
            .await
            .unwrap();
        processor
            .process_log(log_for(&LimitOrderExecuted { identifier: unknown }, 5, 100, 1))
            .await
            .unwrap();
        processor
            .process_log(log_for(
                &DCAOrderExecuted {
                    identifier: unknown,
                    amountInBalance: U256::ZERO,
                },
                5,
                100,
                2,
            ))
            .await
            .unwrap();
        processor
            .process_log(log_for(&TransferOrderCancelled { identifier: unknown }, 5, 100, 3))
            .await
            .unwrap();

        assert_eq!(processor.store().order_count(), 0);
    }

    #[tokio::test]
    async fn swap_executed_is_unconditional() {
        let processor = processor();
        let id = B256::repeat_byte(0xab);

        processor
            .process_log(log_for(&swap_created(id, 500), 1, 10, 0))
            .await
            .unwrap();
        processor
            .process_log(log_for(&SwapOrderExecuted { identifier: id }, 2, 20, 0))
            .await
            .unwrap();

        assert!(processor.store().swap_orders.get(&id).unwrap().executed);
    }

    #[tokio::test]
    async fn limit_order_lifecycle() {
        let processor = processor();
        let id = B256::repeat_byte(0xac);
        let created = LimitOrderCreated {
            actor: actor(),
            identifier: id,
            tokenIn: Address::repeat_byte(0x05),
            tokenOut: Address::repeat_byte(0x06),
            amountIn: U256::from(2000u64),
            amountOutMin: U256::from(1900u64),
            startDelay: U256::ZERO,
            deadline: U256::from(1_800_000_000u64),
        };

        processor.process_log(log_for(&created, 3, 30, 0)).await.unwrap();
        let order = processor.store().limit_orders.get(&id).unwrap();
        assert!(!order.executed && !order.cancelled);

        processor
            .process_log(log_for(&LimitOrderExecuted { identifier: id }, 4, 40, 0))
            .await
            .unwrap();
        assert!(processor.store().limit_orders.get(&id).unwrap().executed);
    }

    #[tokio::test]
    async fn dca_order_drains_to_completion() {
        // numOfOrders=5, amountIn=500: executed only at zero balance
        let processor = processor();
        let id = B256::repeat_byte(0xbb);

        processor
            .process_log(log_for(&dca_created(id, 500, 5), 1, 100, 0))
            .await
            .unwrap();

        let order = processor.store().dca_orders.get(&id).unwrap();
        assert_eq!(order.amount_in_balance, U256::ZERO);
        assert_eq!(order.num_of_orders, 5);
        assert!(!order.executed);

        processor
            .process_log(log_for(
                &DCAOrderExecuted {
                    identifier: id,
                    amountInBalance: U256::from(400u64),
                },
                2,
                200,
                0,
            ))
            .await
            .unwrap();

        let order = processor.store().dca_orders.get(&id).unwrap();
        assert_eq!(order.amount_in_balance, U256::from(400u64));
        assert!(!order.executed);

        processor
            .process_log(log_for(
                &DCAOrderExecuted {
                    identifier: id,
                    amountInBalance: U256::ZERO,
                },
                3,
                300,
                0,
            ))
            .await
            .unwrap();

        let order = processor.store().dca_orders.get(&id).unwrap();
        assert!(order.executed);
    }

    #[tokio::test]
    async fn transfer_order_drains_like_dca() {
        let processor = processor();
        let id = B256::repeat_byte(0xcc);
        let created = TransferOrderCreated {
            actor: actor(),
            identifier: id,
            receiver: Address::repeat_byte(0x09),
            tokenIn: Address::repeat_byte(0x03),
            amountIn: U256::from(900u64),
            startDelay: U256::ZERO,
            numOfOrders: U256::from(3u64),
            iMinutes: 14,
            iHours: 2,
        };

        processor.process_log(log_for(&created, 1, 100, 0)).await.unwrap();
        let order = processor.store().transfer_orders.get(&id).unwrap();
        assert_eq!(order.receiver, Address::repeat_byte(0x09));
        assert_eq!(order.interval.as_minutes(), 120);

        processor
            .process_log(log_for(
                &TransferOrderExecuted {
                    identifier: id,
                    amountInBalance: U256::from(600u64),
                },
                2,
                200,
                0,
            ))
            .await
            .unwrap();
        assert!(!processor.store().transfer_orders.get(&id).unwrap().executed);

        processor
            .process_log(log_for(
                &TransferOrderExecuted {
                    identifier: id,
                    amountInBalance: U256::ZERO,
                },
                3,
                300,
                0,
            ))
            .await
            .unwrap();
        assert!(processor.store().transfer_orders.get(&id).unwrap().executed);
    }

    #[tokio::test]
    async fn executed_and_cancelled_are_independent() {
        let processor = processor();
        let id = B256::repeat_byte(0xdd);

        processor
            .process_log(log_for(&swap_created(id, 100), 1, 10, 0))
            .await
            .unwrap();
        processor
            .process_log(log_for(&SwapOrderExecuted { identifier: id }, 2, 20, 0))
            .await
            .unwrap();
        processor
            .process_log(log_for(&SwapOrderCancelled { identifier: id }, 3, 30, 0))
            .await
            .unwrap();

        let order = processor.store().swap_orders.get(&id).unwrap();
        assert!(order.executed);
        assert!(order.cancelled);
    }

    #[tokio::test]
    async fn duplicate_created_resets_record() {
        let processor = processor();
        let id = B256::repeat_byte(0xbe);

        processor
            .process_log(log_for(&dca_created(id, 500, 5), 1, 100, 0))
            .await
            .unwrap();
        processor
            .process_log(log_for(
                &DCAOrderExecuted {
                    identifier: id,
                    amountInBalance: U256::from(400u64),
                },
                2,
                200,
                0,
            ))
            .await
            .unwrap();

        // Replayed Created clobbers the drained balance
        processor
            .process_log(log_for(&dca_created(id, 500, 5), 3, 300, 0))
            .await
            .unwrap();

        let order = processor.store().dca_orders.get(&id).unwrap();
        assert_eq!(order.amount_in_balance, U256::ZERO);
        assert!(!order.executed);
        assert_eq!(processor.store().dca_orders.count(), 1);
    }

    #[tokio::test]
    async fn admin_events_are_append_only() {
        let processor = processor();
        let account = Address::repeat_byte(0x07);

        let paused = Paused { account };
        processor.process_log(log_for(&paused, 1, 100, 0)).await.unwrap();
        // Same (txHash, logIndex): replay must not duplicate or rewrite
        processor.process_log(log_for(&paused, 1, 100, 0)).await.unwrap();

        let unpaused = Unpaused { account };
        processor.process_log(log_for(&unpaused, 2, 200, 0)).await.unwrap();

        let granted = RoleGranted {
            role: B256::repeat_byte(0x10),
            account,
            sender: actor(),
        };
        processor.process_log(log_for(&granted, 3, 300, 1)).await.unwrap();

        assert_eq!(processor.store().admin_log.count(), 3);
        let recent = processor.store().admin_log.recent(10);
        assert_eq!(recent[0].action.kind(), "RoleGranted");
    }

    #[tokio::test]
    async fn unrecognized_topics_are_skipped() {
        let processor = processor();

        let mut log = log_for(&swap_created(B256::repeat_byte(0x01), 1), 1, 10, 0);
        log.inner.data = alloy_primitives::LogData::new_unchecked(
            vec![B256::repeat_byte(0x99)],
            Default::default(),
        );

        processor.process_log(log).await.unwrap();
        assert_eq!(processor.store().order_count(), 0);
    }

    #[tokio::test]
    async fn relevance_filter_matches_contract_address() {
        let processor = processor();
        let log = log_for(&swap_created(B256::repeat_byte(0x01), 1), 1, 10, 0);
        assert!(processor.is_relevant_log(&log));

        let mut foreign = log.clone();
        foreign.inner.address = Address::repeat_byte(0x77);
        assert!(!processor.is_relevant_log(&foreign));
    }
}
