use tern_dns_domain::{Label, Record, ResourceRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedRecord {
    pub record: Record,
    pub ttl: u32,
    /// Insertion time in clock seconds.
    pub stored_at: u64,
}

impl CachedRecord {
    pub fn new(record: Record, ttl: u32, stored_at: u64) -> Self {
        Self {
            record,
            ttl,
            stored_at,
        }
    }

    #[inline]
    pub fn remaining_ttl(&self, now: u64) -> i64 {
        i64::from(self.ttl) - now.saturating_sub(self.stored_at) as i64
    }

    #[inline]
    pub fn expires_at(&self) -> u64 {
        self.stored_at.saturating_add(u64::from(self.ttl))
    }

    #[inline]
    pub fn is_expired(&self, now: u64) -> bool {
        self.remaining_ttl(now) < 1
    }

    /// The record as an answer for `name`, carrying its remaining TTL.
    pub fn to_resource_record(&self, name: &Label, now: u64) -> ResourceRecord {
        let remaining = self.remaining_ttl(now).clamp(0, i64::from(u32::MAX)) as u32;
        ResourceRecord::new(name.clone(), remaining, self.record.clone())
    }
}
