pub mod error;
pub mod udp;

pub use error::UpstreamError;
pub use udp::{UpstreamSocket, MAX_UDP_MESSAGE_SIZE};
