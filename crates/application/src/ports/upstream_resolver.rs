use async_trait::async_trait;
use tern_dns_domain::{DnsError, Question, ResourceRecord};

#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// Forwards one question and returns the answer section of the reply.
    async fn resolve(&self, question: &Question) -> Result<Vec<ResourceRecord>, DnsError>;
}
