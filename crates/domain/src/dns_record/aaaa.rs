use super::{rdata, Record, RecordData, RecordType};
use crate::errors::DomainError;
use std::fmt;
use std::net::Ipv6Addr;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AAAA(pub Ipv6Addr);

impl RecordData for AAAA {
    const TYPE: RecordType = RecordType::AAAA;

    fn parse_text(text: &str) -> Result<Self, DomainError> {
        text.trim()
            .parse::<Ipv6Addr>()
            .map(AAAA)
            .map_err(|e| DomainError::record_text(Self::TYPE, text, e.to_string()))
    }

    fn encode_wire(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0.octets());
    }

    fn decode_wire(message: &[u8], start: usize, length: usize) -> Result<Self, DomainError> {
        let bytes = rdata(Self::TYPE, message, start, length)?;
        let octets: [u8; 16] = bytes.try_into().map_err(|_| {
            DomainError::record_data(Self::TYPE, format!("expected 16 bytes, got {}", length))
        })?;
        Ok(AAAA(Ipv6Addr::from(octets)))
    }

    fn into_record(self) -> Record {
        Record::AAAA(self)
    }
}

impl fmt::Display for AAAA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
