mod admin;
mod orders;

pub use admin::{Paused, RoleAdminChanged, RoleGranted, RoleRevoked, Unpaused};
pub use orders::{
    DCAOrderCancelled, DCAOrderCreated, DCAOrderExecuted, LimitOrdeCancelled, LimitOrderCreated,
    LimitOrderExecuted, SwapOrderCancelled, SwapOrderCreated, SwapOrderExecuted,
    TransferOrderCancelled, TransferOrderCreated, TransferOrderExecuted,
};
