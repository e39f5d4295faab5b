use tern_dns_domain::{DnsError, Question, ResourceRecord, ZoneMatch, ZoneSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalAnswer {
    /// No zone claims the name; resolution continues elsewhere.
    NotLocal,
    /// An entry matched. The list may be empty when it has no records of the type.
    Records(Vec<ResourceRecord>),
}

/// Answers `question` from the configured zones.
///
/// A name inside an exclusive zone without an entry is an authoritative
/// NameError.
pub fn answer_from_zones(
    zones: &ZoneSet,
    question: &Question,
    ttl: u32,
) -> Result<LocalAnswer, DnsError> {
    match zones.lookup(&question.name) {
        ZoneMatch::NoZone | ZoneMatch::NoEntry { exclusive: false } => Ok(LocalAnswer::NotLocal),
        ZoneMatch::NoEntry { exclusive: true } => Err(DnsError::name_error(true)),
        ZoneMatch::Entry(entry) => Ok(LocalAnswer::Records(
            entry
                .records_for(question.qtype)
                .into_iter()
                .map(|record| ResourceRecord::new(question.name.clone(), ttl, record.clone()))
                .collect(),
        )),
    }
}
