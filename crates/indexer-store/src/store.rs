use std::sync::Arc;
use tokio::sync::RwLock;

use indexer_core::types::{DcaOrder, LimitOrder, SwapOrder, TransferOrder};

use crate::admin::AdminLog;
use crate::orders::OrderTable;
use crate::sync_state::SyncState;

/// Thread-safe in-memory store for all Magenta entities.
///
/// Handlers receive this behind an `Arc`; nothing else holds mutable
/// global state.
#[derive(Debug)]
pub struct MagentaStore {
    pub swap_orders: Arc<OrderTable<SwapOrder>>,
    pub limit_orders: Arc<OrderTable<LimitOrder>>,
    pub dca_orders: Arc<OrderTable<DcaOrder>>,
    pub transfer_orders: Arc<OrderTable<TransferOrder>>,
    pub admin_log: Arc<AdminLog>,
    pub sync_state: Arc<RwLock<SyncState>>,
}

impl MagentaStore {
    pub fn new() -> Self {
        Self {
            swap_orders: Arc::new(OrderTable::new()),
            limit_orders: Arc::new(OrderTable::new()),
            dca_orders: Arc::new(OrderTable::new()),
            transfer_orders: Arc::new(OrderTable::new()),
            admin_log: Arc::new(AdminLog::new()),
            sync_state: Arc::new(RwLock::new(SyncState::default())),
        }
    }

    /// Total number of order records across all four kinds
    pub fn order_count(&self) -> usize {
        self.swap_orders.count()
            + self.limit_orders.count()
            + self.dca_orders.count()
            + self.transfer_orders.count()
    }
}

impl Default for MagentaStore {
    fn default() -> Self {
        Self::new()
    }
}
