use anyhow::Context;
use std::sync::Arc;
use tern_dns_application::use_cases::HandleDnsQueryUseCase;
use tern_dns_domain::{Config, ZoneSet};
use tern_dns_infrastructure::dns::{
    CacheService, PassthroughConfig, PassthroughService, SystemClock, UpstreamError,
};
use tokio::task::JoinHandle;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
    /// Resolves to `Err` when the upstream failed for good.
    pub upstream_task: JoinHandle<Result<(), UpstreamError>>,
}

impl DnsServices {
    pub async fn new(config: &Config, zones: Arc<ZoneSet>) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let passthrough_config = PassthroughConfig::from_upstream(&config.upstream)
            .with_context(|| format!("Invalid upstream address: {}", config.upstream.address))?;
        let (upstream, upstream_task) = PassthroughService::spawn(passthrough_config).await?;

        let mut use_case =
            HandleDnsQueryUseCase::new(zones, Arc::new(upstream), config.zones.authoritative_ttl);

        if config.cache.enabled {
            let (cache, _cache_task) = CacheService::spawn(config.cache.max_records, SystemClock);
            use_case = use_case.with_cache(Arc::new(cache));
        } else {
            info!("Record cache disabled");
        }

        Ok(Self {
            handler_use_case: Arc::new(use_case),
            upstream_task,
        })
    }
}
