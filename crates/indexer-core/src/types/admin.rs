use alloy_primitives::{Address, B256};

use crate::types::BlockMeta;

/// Key for append-only administrative records.
///
/// One contract event maps to exactly one record; `(transaction hash,
/// log index)` is unique across the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdminLogKey {
    pub transaction_hash: B256,
    pub log_index: u64,
}

/// Payload of an administrative event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    Paused {
        account: Address,
    },
    Unpaused {
        account: Address,
    },
    RoleGranted {
        role: B256,
        account: Address,
        sender: Address,
    },
    RoleRevoked {
        role: B256,
        account: Address,
        sender: Address,
    },
    RoleAdminChanged {
        role: B256,
        previous_admin_role: B256,
        new_admin_role: B256,
    },
}

impl AdminAction {
    /// Event name, for logs and the API
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Paused { .. } => "Paused",
            Self::Unpaused { .. } => "Unpaused",
            Self::RoleGranted { .. } => "RoleGranted",
            Self::RoleRevoked { .. } => "RoleRevoked",
            Self::RoleAdminChanged { .. } => "RoleAdminChanged",
        }
    }
}

/// An audit record; written once, never updated
#[derive(Debug, Clone)]
pub struct AdminRecord {
    pub key: AdminLogKey,
    pub action: AdminAction,
    pub meta: BlockMeta,
}
