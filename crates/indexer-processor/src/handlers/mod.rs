mod admin_events;
mod dca_order;
mod limit_order;
mod swap_order;
mod transfer_order;

pub use admin_events::AdminEventHandler;
pub use dca_order::DcaOrderHandler;
pub use limit_order::LimitOrderHandler;
pub use swap_order::SwapOrderHandler;
pub use transfer_order::TransferOrderHandler;

use alloy::rpc::types::Log;
use indexer_core::types::BlockMeta;

/// Block context for the entity being written. Fields can be absent on
/// pending logs; the syncer only delivers confirmed ones.
pub(crate) fn block_meta(log: &Log) -> BlockMeta {
    BlockMeta {
        block_number: log.block_number.unwrap_or_default(),
        block_timestamp: log.block_timestamp.unwrap_or_default(),
        transaction_hash: log.transaction_hash.unwrap_or_default(),
    }
}
