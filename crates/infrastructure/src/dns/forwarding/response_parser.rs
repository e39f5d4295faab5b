use tern_dns_domain::{DnsError, Message, ResourceRecord};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Answer section of an upstream reply.
    ///
    /// A reply that does not decode is a ServerFailure; a non-zero RCODE is
    /// surfaced with the upstream's AA bit.
    pub fn parse(reply: &[u8]) -> Result<Vec<ResourceRecord>, DnsError> {
        let message = Message::decode(reply).map_err(|e| {
            debug!(error = %e, bytes = reply.len(), "Unparsable upstream reply");
            DnsError::server_failure()
        })?;

        let rcode = message.header.response_code();
        if rcode != 0 {
            return Err(DnsError::from_upstream(
                rcode,
                message.header.authoritative_answer(),
            ));
        }
        Ok(message.answers)
    }
}
