use std::sync::Arc;
use tern_dns_domain::{Config, ZoneSet};
use tern_dns_infrastructure::zones::ZoneLoader;

pub fn load_zones(config: &Config) -> Arc<ZoneSet> {
    Arc::new(ZoneLoader::load_or_empty(&config.zones.path))
}
