/// Current sync mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncMode {
    #[default]
    Historical,
    Realtime,
}

/// Sync statistics
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    pub total_blocks_processed: u64,
    pub total_events_processed: u64,
    pub orders_indexed: u64,
    pub admin_records: u64,
}

/// Sync state tracking
#[derive(Debug, Clone, Default)]
pub struct SyncState {
    /// Last fully synced block number
    pub last_synced_block: u64,

    /// Whether historical sync is complete
    pub historical_sync_complete: bool,

    /// Current sync mode
    pub mode: SyncMode,

    /// Statistics
    pub stats: SyncStats,
}

impl SyncState {
    pub fn new(start_block: u64) -> Self {
        Self {
            last_synced_block: start_block.saturating_sub(1),
            ..Default::default()
        }
    }

    /// Update last synced block
    pub fn set_last_synced_block(&mut self, block: u64) {
        self.last_synced_block = block;
        self.stats.total_blocks_processed += 1;
    }

    /// Mark historical sync as complete
    pub fn complete_historical_sync(&mut self) {
        self.historical_sync_complete = true;
        self.mode = SyncMode::Realtime;
    }

    /// Increment event counter
    pub fn record_event(&mut self) {
        self.stats.total_events_processed += 1;
    }

    /// Increment order counter
    pub fn record_order(&mut self) {
        self.stats.orders_indexed += 1;
    }

    /// Increment administrative record counter
    pub fn record_admin(&mut self) {
        self.stats.admin_records += 1;
    }

    /// Check if currently syncing (not in realtime mode)
    pub fn is_syncing(&self) -> bool {
        !matches!(self.mode, SyncMode::Realtime) || !self.historical_sync_complete
    }
}
