pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;
pub mod zones;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::{FailurePolicy, UpstreamConfig};
pub use zones::ZonesConfig;
