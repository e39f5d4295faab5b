use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" for TTL bookkeeping, in whole seconds.
pub trait Clock: Send + Sync + 'static {
    fn now_secs(&self) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
