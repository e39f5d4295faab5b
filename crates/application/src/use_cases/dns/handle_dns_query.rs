use super::local_zone::{answer_from_zones, LocalAnswer};
use crate::ports::{RecordCache, UpstreamResolver};
use std::sync::Arc;
use tern_dns_domain::{
    DnsClass, DnsError, Header, Message, Question, ResourceRecord, ZoneSet,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    LocalZone,
    Cache,
    Upstream,
}

/// Resolves every question of a request: local zones first, then the
/// cache, then the upstream. The first failing question aborts the request.
pub struct HandleDnsQueryUseCase {
    zones: Arc<ZoneSet>,
    upstream: Arc<dyn UpstreamResolver>,
    cache: Option<Arc<dyn RecordCache>>,
    authoritative_ttl: u32,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        zones: Arc<ZoneSet>,
        upstream: Arc<dyn UpstreamResolver>,
        authoritative_ttl: u32,
    ) -> Self {
        Self {
            zones,
            upstream,
            cache: None,
            authoritative_ttl,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn RecordCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub async fn execute(&self, request: &Message) -> Message {
        let id = request.header.id;

        if request.header.is_response() || request.questions.is_empty() {
            debug!(id, "Rejecting message that is not a query");
            return DnsError::format_error().to_message(id, None);
        }

        let mut answers = Vec::new();
        let mut all_local = true;

        for question in &request.questions {
            match self.resolve_question(question).await {
                Ok((records, source)) => {
                    debug!(
                        question = %question,
                        source = ?source,
                        answers = records.len(),
                        "Question answered"
                    );
                    all_local &= source == AnswerSource::LocalZone;
                    answers.extend(records);
                }
                Err(error) => {
                    debug!(question = %question, rcode = %error.rcode, "Question failed");
                    return error.to_message(id, Some(question));
                }
            }
        }

        Message::new(
            Header::answer(id, all_local, request.header.recursion_desired()),
            request.questions.clone(),
            answers,
        )
    }

    async fn resolve_question(
        &self,
        question: &Question,
    ) -> Result<(Vec<ResourceRecord>, AnswerSource), DnsError> {
        if question.qclass != DnsClass::IN {
            return Err(DnsError::not_implemented());
        }

        if let LocalAnswer::Records(records) =
            answer_from_zones(&self.zones, question, self.authoritative_ttl)?
        {
            return Ok((records, AnswerSource::LocalZone));
        }

        if let Some(cache) = &self.cache {
            let cached = cache.get(&question.name, question.qtype).await;
            if !cached.is_empty() {
                return Ok((cached, AnswerSource::Cache));
            }
        }

        let records = self.upstream.resolve(question).await?;
        if let Some(cache) = &self.cache {
            if !records.is_empty() {
                cache.put(records.clone()).await;
            }
        }
        Ok((records, AnswerSource::Upstream))
    }
}
