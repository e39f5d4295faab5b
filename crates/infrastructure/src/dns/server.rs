use std::net::SocketAddr;
use std::sync::Arc;
use tern_dns_application::use_cases::HandleDnsQueryUseCase;
use tern_dns_domain::Message;
use tracing::debug;

/// Turns one request datagram into one reply datagram.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// `None` when the datagram is not a decodable DNS message; such
    /// datagrams get no reply.
    pub async fn handle_datagram(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::decode(datagram) {
            Ok(request) => request,
            Err(e) => {
                debug!(client = %client, bytes = datagram.len(), error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        debug!(
            client = %client,
            id = request.header.id,
            questions = request.questions.len(),
            "DNS query received"
        );

        let response = self.use_case.execute(&request).await;
        debug!(
            client = %client,
            id = response.header.id,
            rcode = response.header.response_code(),
            answers = response.answers.len(),
            "DNS response ready"
        );
        Some(response.encode())
    }
}
