use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ZonesConfig {
    pub path: String,

    /// TTL attached to every answer served from a local zone.
    pub authoritative_ttl: u32,
}

impl Default for ZonesConfig {
    fn default() -> Self {
        Self {
            path: "zones.toml".to_string(),
            authoritative_ttl: 60,
        }
    }
}
