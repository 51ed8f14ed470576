mod admin;
mod orders;

pub use admin::GqlAdminRecord;
pub use orders::{GqlDcaOrder, GqlLimitOrder, GqlSwapOrder, GqlTransferOrder};
