use super::{rdata, Record, RecordData, RecordType};
use crate::errors::DomainError;
use std::fmt;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct A(pub Ipv4Addr);

impl RecordData for A {
    const TYPE: RecordType = RecordType::A;

    fn parse_text(text: &str) -> Result<Self, DomainError> {
        text.trim()
            .parse::<Ipv4Addr>()
            .map(A)
            .map_err(|e| DomainError::record_text(Self::TYPE, text, e.to_string()))
    }

    fn encode_wire(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0.octets());
    }

    fn decode_wire(message: &[u8], start: usize, length: usize) -> Result<Self, DomainError> {
        let bytes = rdata(Self::TYPE, message, start, length)?;
        let octets: [u8; 4] = bytes.try_into().map_err(|_| {
            DomainError::record_data(Self::TYPE, format!("expected 4 bytes, got {}", length))
        })?;
        Ok(A(Ipv4Addr::from(octets)))
    }

    fn into_record(self) -> Record {
        Record::A(self)
    }
}

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
