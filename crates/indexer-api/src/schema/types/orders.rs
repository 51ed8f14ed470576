use async_graphql::SimpleObject;
use indexer_core::types::{DcaOrder, LimitOrder, SwapOrder, TransferOrder};

/// GraphQL swap order
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlSwapOrder {
    pub id: String,
    pub actor: String,
    pub identifier: String,
    pub token_in: String,
    pub token_out: String,
    pub amount_in: String,
    pub amount_out_min: String,
    pub start_delay: u64,
    pub deadline: u64,
    pub executed: bool,
    pub cancelled: bool,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: String,
}

impl From<SwapOrder> for GqlSwapOrder {
    fn from(order: SwapOrder) -> Self {
        Self {
            id: format!("{:?}", order.identifier),
            actor: format!("{:?}", order.actor),
            identifier: format!("{:?}", order.identifier),
            token_in: format!("{:?}", order.token_in),
            token_out: format!("{:?}", order.token_out),
            amount_in: order.amount_in.to_string(),
            amount_out_min: order.amount_out_min.to_string(),
            start_delay: order.start_delay,
            deadline: order.deadline,
            executed: order.executed,
            cancelled: order.cancelled,
            block_number: order.meta.block_number,
            block_timestamp: order.meta.block_timestamp,
            transaction_hash: format!("{:?}", order.meta.transaction_hash),
        }
    }
}

/// GraphQL limit order
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlLimitOrder {
    pub id: String,
    pub actor: String,
    pub identifier: String,
    pub token_in: String,
    pub token_out: String,
    pub amount_in: String,
    pub amount_out_min: String,
    pub start_delay: u64,
    pub deadline: u64,
    pub executed: bool,
    pub cancelled: bool,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: String,
}

impl From<LimitOrder> for GqlLimitOrder {
    fn from(order: LimitOrder) -> Self {
        Self {
            id: format!("{:?}", order.identifier),
            actor: format!("{:?}", order.actor),
            identifier: format!("{:?}", order.identifier),
            token_in: format!("{:?}", order.token_in),
            token_out: format!("{:?}", order.token_out),
            amount_in: order.amount_in.to_string(),
            amount_out_min: order.amount_out_min.to_string(),
            start_delay: order.start_delay,
            deadline: order.deadline,
            executed: order.executed,
            cancelled: order.cancelled,
            block_number: order.meta.block_number,
            block_timestamp: order.meta.block_timestamp,
            transaction_hash: format!("{:?}", order.meta.transaction_hash),
        }
    }
}

/// GraphQL DCA order
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlDcaOrder {
    pub id: String,
    pub actor: String,
    pub identifier: String,
    pub token_in: String,
    pub token_out: String,
    pub amount_in: String,
    pub amount_in_balance: String,
    pub start_delay: u64,
    pub num_of_orders: u64,
    pub i_minutes: u8,
    pub i_hours: u8,
    /// Interval length in minutes, derived from the enum pair
    pub interval_minutes: u64,
    pub executed: bool,
    pub cancelled: bool,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: String,
}

impl From<DcaOrder> for GqlDcaOrder {
    fn from(order: DcaOrder) -> Self {
        Self {
            id: format!("{:?}", order.identifier),
            actor: format!("{:?}", order.actor),
            identifier: format!("{:?}", order.identifier),
            token_in: format!("{:?}", order.token_in),
            token_out: format!("{:?}", order.token_out),
            amount_in: order.amount_in.to_string(),
            amount_in_balance: order.amount_in_balance.to_string(),
            start_delay: order.start_delay,
            num_of_orders: order.num_of_orders,
            i_minutes: order.interval.minutes as u8,
            i_hours: order.interval.hours as u8,
            interval_minutes: order.interval.as_minutes(),
            executed: order.executed,
            cancelled: order.cancelled,
            block_number: order.meta.block_number,
            block_timestamp: order.meta.block_timestamp,
            transaction_hash: format!("{:?}", order.meta.transaction_hash),
        }
    }
}

/// GraphQL transfer order
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlTransferOrder {
    pub id: String,
    pub actor: String,
    pub identifier: String,
    pub receiver: String,
    pub token_in: String,
    pub amount_in: String,
    pub amount_in_balance: String,
    pub start_delay: u64,
    pub num_of_orders: u64,
    pub i_minutes: u8,
    pub i_hours: u8,
    pub interval_minutes: u64,
    pub executed: bool,
    pub cancelled: bool,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: String,
}

impl From<TransferOrder> for GqlTransferOrder {
    fn from(order: TransferOrder) -> Self {
        Self {
            id: format!("{:?}", order.identifier),
            actor: format!("{:?}", order.actor),
            identifier: format!("{:?}", order.identifier),
            receiver: format!("{:?}", order.receiver),
            token_in: format!("{:?}", order.token_in),
            amount_in: order.amount_in.to_string(),
            amount_in_balance: order.amount_in_balance.to_string(),
            start_delay: order.start_delay,
            num_of_orders: order.num_of_orders,
            i_minutes: order.interval.minutes as u8,
            i_hours: order.interval.hours as u8,
            interval_minutes: order.interval.as_minutes(),
            executed: order.executed,
            cancelled: order.cancelled,
            block_number: order.meta.block_number,
            block_timestamp: order.meta.block_timestamp,
            transaction_hash: format!("{:?}", order.meta.transaction_hash),
        }
    }
}
