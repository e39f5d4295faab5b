use async_trait::async_trait;
use tern_dns_domain::{Label, QueryType, ResourceRecord};

/// TTL-aware store of records learned from the upstream.
#[async_trait]
pub trait RecordCache: Send + Sync {
    /// Live records for `name`/`qtype` with their remaining TTL. Empty on a miss.
    async fn get(&self, name: &Label, qtype: QueryType) -> Vec<ResourceRecord>;

    /// Hands `records` to the cache without waiting for them to be stored.
    async fn put(&self, records: Vec<ResourceRecord>);
}
