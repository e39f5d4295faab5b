//! Connected UDP socket towards the upstream resolver (RFC 1035 §4.2.1).
//!
//! Without EDNS(0) a reply never exceeds 512 bytes; anything longer is
//! cut to the buffer.

use super::UpstreamError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

pub struct UpstreamSocket {
    socket: UdpSocket,
    server: SocketAddr,
}

impl UpstreamSocket {
    pub async fn connect(server: SocketAddr) -> Result<Self, UpstreamError> {
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|source| UpstreamError::Connect { server, source })?;
        socket
            .connect(server)
            .await
            .map_err(|source| UpstreamError::Connect { server, source })?;

        debug!(server = %server, "Upstream socket connected");
        Ok(Self { socket, server })
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }

    pub async fn send(&self, query: &[u8]) -> Result<(), UpstreamError> {
        let server = self.server;
        let sent = self
            .socket
            .send(query)
            .await
            .map_err(|source| UpstreamError::Send { server, source })?;
        debug!(server = %server, bytes_sent = sent, "Query sent upstream");
        Ok(())
    }

    /// Reads one reply and checks that it answers query `id`.
    pub async fn recv_reply(&self, id: u16, timeout: Duration) -> Result<Vec<u8>, UpstreamError> {
        let server = self.server;
        let mut buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];

        let received = tokio::time::timeout(timeout, self.socket.recv(&mut buf))
            .await
            .map_err(|_| UpstreamError::Timeout { server })?
            .map_err(|source| UpstreamError::Receive { server, source })?;
        buf.truncate(received);

        let reply_id = match buf.as_slice() {
            [high, low, ..] => Some(u16::from_be_bytes([*high, *low])),
            _ => None,
        };
        if reply_id != Some(id) {
            return Err(UpstreamError::UnexpectedReply {
                server,
                expected: id,
                received: reply_id,
            });
        }

        debug!(server = %server, bytes_received = received, "Upstream reply received");
        Ok(buf)
    }
}
