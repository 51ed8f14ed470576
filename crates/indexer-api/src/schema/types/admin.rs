use async_graphql::SimpleObject;
use indexer_core::types::{AdminAction, AdminRecord};

/// GraphQL administrative record. Role/account fields are present for
/// the variants that carry them.
#[derive(Debug, Clone, SimpleObject)]
pub struct GqlAdminRecord {
    pub id: String,
    pub kind: String,
    pub account: Option<String>,
    pub sender: Option<String>,
    pub role: Option<String>,
    pub previous_admin_role: Option<String>,
    pub new_admin_role: Option<String>,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: String,
    pub log_index: u64,
}

impl From<AdminRecord> for GqlAdminRecord {
    fn from(record: AdminRecord) -> Self {
        let mut gql = Self {
            id: format!("{:?}-{}", record.key.transaction_hash, record.key.log_index),
            kind: record.action.kind().to_string(),
            account: None,
            sender: None,
            role: None,
            previous_admin_role: None,
            new_admin_role: None,
            block_number: record.meta.block_number,
            block_timestamp: record.meta.block_timestamp,
            transaction_hash: format!("{:?}", record.meta.transaction_hash),
            log_index: record.key.log_index,
        };

        match record.action {
            AdminAction::Paused { account } | AdminAction::Unpaused { account } => {
                gql.account = Some(format!("{:?}", account));
            }
            AdminAction::RoleGranted {
                role,
                account,
                sender,
            }
            | AdminAction::RoleRevoked {
                role,
                account,
                sender,
            } => {
                gql.role = Some(format!("{:?}", role));
                gql.account = Some(format!("{:?}", account));
                gql.sender = Some(format!("{:?}", sender));
            }
            AdminAction::RoleAdminChanged {
                role,
                previous_admin_role,
                new_admin_role,
            } => {
                gql.role = Some(format!("{:?}", role));
                gql.previous_admin_role = Some(format!("{:?}", previous_admin_role));
                gql.new_admin_role = Some(format!("{:?}", new_admin_role));
            }
        }

        gql
    }
}
