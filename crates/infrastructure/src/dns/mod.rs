pub mod cache;
pub mod forwarding;
pub mod server;
pub mod transport;

pub use cache::{CacheHandle, CacheService, Clock, SystemClock};
pub use forwarding::{PassthroughConfig, PassthroughHandle, PassthroughService};
pub use server::DnsServerHandler;
pub use transport::UpstreamError;
