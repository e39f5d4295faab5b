//! TTL-bounded record cache: a label-suffix tree owned by one service task.

pub mod clock;
pub mod record;
pub mod service;
pub mod tree;

pub use clock::{Clock, SystemClock};
pub use record::CachedRecord;
pub use service::{CacheHandle, CacheService};
pub use tree::RecordTree;
