mod admin;
mod orders;
mod store;
mod sync_state;

pub use admin::AdminLog;
pub use orders::{OrderRecord, OrderTable};
pub use store::MagentaStore;
pub use sync_state::{SyncMode, SyncState, SyncStats};
