use std::io;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Failed to connect to upstream {server}: {source}")]
    Connect {
        server: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Failed to send query to upstream {server}: {source}")]
    Send {
        server: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Failed to receive reply from upstream {server}: {source}")]
    Receive {
        server: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Timed out waiting for upstream {server}")]
    Timeout { server: SocketAddr },

    #[error("Upstream {server} answered query {expected} with reply {received:?}")]
    UnexpectedReply {
        server: SocketAddr,
        expected: u16,
        received: Option<u16>,
    },
}
