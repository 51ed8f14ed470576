mod admin;
mod interval;
mod order;

pub use admin::{AdminAction, AdminLogKey, AdminRecord};
pub use interval::{Interval, IntervalHours, IntervalMinutes};
pub use order::{BlockMeta, DcaOrder, LimitOrder, SwapOrder, TransferOrder};
