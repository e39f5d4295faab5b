mod record_cache;
mod upstream_resolver;

pub use record_cache::RecordCache;
pub use upstream_resolver::UpstreamResolver;
