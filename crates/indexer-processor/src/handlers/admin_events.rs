use alloy::rpc::types::Log;
use alloy_sol_types::SolEvent;
use indexer_core::events::{Paused, RoleAdminChanged, RoleGranted, RoleRevoked, Unpaused};
use indexer_core::types::{AdminAction, AdminLogKey, AdminRecord};
use indexer_core::{IndexerError, Result};
use indexer_store::MagentaStore;
use std::sync::Arc;
use tracing::debug;

use crate::handlers::block_meta;

/// Writes append-only audit records for pause and role events
pub struct AdminEventHandler {
    store: Arc<MagentaStore>,
}

impl AdminEventHandler {
    pub fn new(store: Arc<MagentaStore>) -> Self {
        Self { store }
    }

    pub async fn handle_paused(&self, log: &Log) -> Result<()> {
        let event = Paused::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        self.append(
            log,
            AdminAction::Paused {
                account: event.account,
            },
        )
        .await
    }

    pub async fn handle_unpaused(&self, log: &Log) -> Result<()> {
        let event = Unpaused::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        self.append(
            log,
            AdminAction::Unpaused {
                account: event.account,
            },
        )
        .await
    }

    pub async fn handle_role_granted(&self, log: &Log) -> Result<()> {
        let event = RoleGranted::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        self.append(
            log,
            AdminAction::RoleGranted {
                role: event.role,
                account: event.account,
                sender: event.sender,
            },
        )
        .await
    }

    pub async fn handle_role_revoked(&self, log: &Log) -> Result<()> {
        let event = RoleRevoked::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        self.append(
            log,
            AdminAction::RoleRevoked {
                role: event.role,
                account: event.account,
                sender: event.sender,
            },
        )
        .await
    }

    pub async fn handle_role_admin_changed(&self, log: &Log) -> Result<()> {
        let event = RoleAdminChanged::decode_log(&log.inner)
            .map_err(|e| IndexerError::EventDecode(e.to_string()))?;

        self.append(
            log,
            AdminAction::RoleAdminChanged {
                role: event.role,
                previous_admin_role: event.previousAdminRole,
                new_admin_role: event.newAdminRole,
            },
        )
        .await
    }

    async fn append(&self, log: &Log, action: AdminAction) -> Result<()> {
        let record = AdminRecord {
            key: AdminLogKey {
                transaction_hash: log.transaction_hash.unwrap_or_default(),
                log_index: log.log_index.unwrap_or_default(),
            },
            action,
            meta: block_meta(log),
        };

        let kind = record.action.kind();
        let appended = self.store.admin_log.append(record);

        debug!(
            event = kind,
            block = log.block_number.unwrap_or_default(),
            appended = appended,
            "Administrative event"
        );

        let mut state = self.store.sync_state.write().await;
        if appended {
            state.record_admin();
        }
        state.record_event();

        Ok(())
    }
}
