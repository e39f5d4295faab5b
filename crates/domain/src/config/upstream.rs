use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

/// What the passthrough resolver does when the upstream stays unreachable
/// after one reconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the resolver; the process exits with an error.
    #[default]
    Exit,
    /// Answer the request with ServerFailure and keep serving.
    Servfail,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Exit => f.write_str("exit"),
            FailurePolicy::Servfail => f.write_str("servfail"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub address: String,

    pub timeout_ms: u64,

    pub failure_policy: FailurePolicy,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: "1.1.1.1:53".to_string(),
            timeout_ms: 5000,
            failure_policy: FailurePolicy::Exit,
        }
    }
}

impl UpstreamConfig {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.address.parse().ok()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
