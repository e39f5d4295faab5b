use super::{MessageBuilder, ResponseParser};
use crate::dns::transport::{UpstreamError, UpstreamSocket};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tern_dns_application::ports::UpstreamResolver;
use tern_dns_domain::config::UpstreamConfig;
use tern_dns_domain::{DnsError, FailurePolicy, Question, ResourceRecord};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

const REQUEST_QUEUE: usize = 1024;

#[derive(Debug, Clone)]
pub struct PassthroughConfig {
    pub server: SocketAddr,
    pub timeout: Duration,
    pub failure_policy: FailurePolicy,
}

impl PassthroughConfig {
    /// `None` when the configured address is not an `ip:port` pair.
    pub fn from_upstream(config: &UpstreamConfig) -> Option<Self> {
        Some(Self {
            server: config.socket_addr()?,
            timeout: config.timeout(),
            failure_policy: config.failure_policy,
        })
    }
}

struct ResolveRequest {
    question: Question,
    reply: oneshot::Sender<Result<Vec<ResourceRecord>, DnsError>>,
}

/// Owns the connection to the upstream and serves one request at a time.
///
/// A failed send or receive drops the socket, reconnects and repeats the
/// exchange once. When that fails too, the [`FailurePolicy`] decides whether
/// the service stops or answers ServerFailure and carries on.
pub struct PassthroughService {
    config: PassthroughConfig,
    socket: Option<UpstreamSocket>,
    requests: mpsc::Receiver<ResolveRequest>,
}

impl PassthroughService {
    /// Connects to the upstream and starts the service loop.
    ///
    /// The task resolves to `Err` when the upstream failed under
    /// [`FailurePolicy::Exit`].
    pub async fn spawn(
        config: PassthroughConfig,
    ) -> Result<(PassthroughHandle, JoinHandle<Result<(), UpstreamError>>), UpstreamError> {
        let socket = UpstreamSocket::connect(config.server).await?;
        let (tx, rx) = mpsc::channel(REQUEST_QUEUE);

        info!(
            upstream = %config.server,
            timeout_ms = config.timeout.as_millis() as u64,
            failure_policy = %config.failure_policy,
            "Passthrough resolver started"
        );

        let service = Self {
            config,
            socket: Some(socket),
            requests: rx,
        };
        let task = tokio::spawn(service.run());
        Ok((PassthroughHandle { requests: tx }, task))
    }

    async fn run(mut self) -> Result<(), UpstreamError> {
        while let Some(ResolveRequest { question, reply }) = self.requests.recv().await {
            match self.exchange(&question).await {
                Ok(bytes) => {
                    let _ = reply.send(ResponseParser::parse(&bytes));
                }
                Err(e) => {
                    let _ = reply.send(Err(DnsError::server_failure()));
                    match self.config.failure_policy {
                        FailurePolicy::Exit => {
                            error!(error = %e, question = %question, "Upstream unreachable after reconnect, stopping");
                            return Err(e);
                        }
                        FailurePolicy::Servfail => {
                            error!(error = %e, question = %question, "Upstream unreachable after reconnect");
                        }
                    }
                }
            }
        }
        debug!("Passthrough resolver stopped");
        Ok(())
    }

    async fn exchange(&mut self, question: &Question) -> Result<Vec<u8>, UpstreamError> {
        let (id, query) = MessageBuilder::build_query(question);

        match self.attempt(id, &query).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                warn!(error = %e, upstream = %self.config.server, "Upstream exchange failed, reconnecting");
                self.attempt(id, &query).await
            }
        }
    }

    async fn attempt(&mut self, id: u16, query: &[u8]) -> Result<Vec<u8>, UpstreamError> {
        let socket = match self.socket.take() {
            Some(socket) => socket,
            None => UpstreamSocket::connect(self.config.server).await?,
        };
        socket.send(query).await?;
        let reply = socket.recv_reply(id, self.config.timeout).await?;
        self.socket = Some(socket);
        Ok(reply)
    }
}

/// Cloneable front door to a running [`PassthroughService`].
#[derive(Clone)]
pub struct PassthroughHandle {
    requests: mpsc::Sender<ResolveRequest>,
}

#[async_trait]
impl UpstreamResolver for PassthroughHandle {
    async fn resolve(&self, question: &Question) -> Result<Vec<ResourceRecord>, DnsError> {
        let (reply, response) = oneshot::channel();
        let request = ResolveRequest {
            question: question.clone(),
            reply,
        };
        if self.requests.send(request).await.is_err() {
            return Err(DnsError::server_failure());
        }
        response.await.unwrap_or_else(|_| Err(DnsError::server_failure()))
    }
}
