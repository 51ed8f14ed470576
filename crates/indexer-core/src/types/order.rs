use alloy_primitives::{Address, B256, U256};

use crate::types::Interval;

/// Block context captured from the log an entity was created from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockMeta {
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
}

/// A one-shot (possibly delayed) token swap order
#[derive(Debug, Clone)]
pub struct SwapOrder {
    /// Account that created the order
    pub actor: Address,
    /// Contract-assigned primary key
    pub identifier: B256,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: U256,
    pub amount_out_min: U256,
    /// Seconds to wait before the order becomes executable
    pub start_delay: u64,
    /// Unix timestamp after which the order lapses
    pub deadline: u64,
    pub executed: bool,
    pub cancelled: bool,
    pub meta: BlockMeta,
}

/// A limit order; same shape and lifecycle as [`SwapOrder`]
#[derive(Debug, Clone)]
pub struct LimitOrder {
    pub actor: Address,
    pub identifier: B256,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: U256,
    pub amount_out_min: U256,
    pub start_delay: u64,
    pub deadline: u64,
    pub executed: bool,
    pub cancelled: bool,
    pub meta: BlockMeta,
}

/// A recurring dollar-cost-averaging order.
///
/// `executed` flips to true only once `amount_in_balance` has drained
/// to zero, not on the first execution.
#[derive(Debug, Clone)]
pub struct DcaOrder {
    pub actor: Address,
    pub identifier: B256,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: U256,
    pub start_delay: u64,
    /// Number of tranches the order is split into
    pub num_of_orders: u64,
    /// Remaining unspent input-token balance, updated on every execution
    pub amount_in_balance: U256,
    pub interval: Interval,
    pub executed: bool,
    pub cancelled: bool,
    pub meta: BlockMeta,
}

/// A recurring token transfer order; drains like [`DcaOrder`]
#[derive(Debug, Clone)]
pub struct TransferOrder {
    pub actor: Address,
    pub identifier: B256,
    pub receiver: Address,
    pub token_in: Address,
    pub amount_in: U256,
    pub start_delay: u64,
    pub num_of_orders: u64,
    pub amount_in_balance: U256,
    pub interval: Interval,
    pub executed: bool,
    pub cancelled: bool,
    pub meta: BlockMeta,
}
