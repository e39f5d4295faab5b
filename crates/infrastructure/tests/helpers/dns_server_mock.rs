#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock upstream answers.
#[derive(Debug, Clone, Copy)]
pub enum MockReply {
    /// One A record, 93.184.216.34 with TTL 300.
    Answer,
    /// Header only, with this RCODE and the AA bit set.
    Rcode(u8),
    /// A reply whose ID never matches the query.
    WrongId,
    /// Ignore the first query, then behave like [`MockReply::Answer`].
    DropFirst,
    /// Never reply.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let seen = counter.fetch_add(1, Ordering::SeqCst);
                            if matches!(reply, MockReply::DropFirst) && seen == 0 {
                                continue;
                            }
                            if let Some(response) = Self::build_mock_response(&buf[..len], reply) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_mock_response(query: &[u8], reply: MockReply) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let mut response = Vec::with_capacity(512);

        match reply {
            MockReply::Silent => return None,
            MockReply::WrongId => {
                response.extend_from_slice(&query[0..2]);
                response[1] ^= 0xff;
            }
            _ => response.extend_from_slice(&query[0..2]),
        }

        let (flags_low, answers) = match reply {
            MockReply::Rcode(rcode) => (0x80 | (rcode & 0x0f), 0u8),
            _ => (0x80, 1u8),
        };
        let flags_high = match reply {
            MockReply::Rcode(_) => 0x85,
            _ => 0x81,
        };
        response.push(flags_high);
        response.push(flags_low);

        // question count copied from the query
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, answers]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        if answers == 1 {
            response.extend_from_slice(&[
                0xc0, 0x0c,
                0x00, 0x01,
                0x00, 0x01,
                0x00, 0x00, 0x01, 0x2c,
                0x00, 0x04,
                93, 184, 216, 34,
            ]);
        }

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
