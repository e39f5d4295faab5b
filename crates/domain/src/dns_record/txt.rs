use super::{rdata, Record, RecordData, RecordType};
use crate::errors::DomainError;
use std::fmt;

/// RDATA kept as the exact bytes, without character-string framing.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TXT(pub Vec<u8>);

impl RecordData for TXT {
    const TYPE: RecordType = RecordType::TXT;

    fn parse_text(text: &str) -> Result<Self, DomainError> {
        if text.len() > usize::from(u16::MAX) {
            return Err(DomainError::record_text(Self::TYPE, text, "text too long"));
        }
        Ok(TXT(text.as_bytes().to_vec()))
    }

    fn encode_wire(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0);
    }

    fn decode_wire(message: &[u8], start: usize, length: usize) -> Result<Self, DomainError> {
        rdata(Self::TYPE, message, start, length).map(|bytes| TXT(bytes.to_vec()))
    }

    fn into_record(self) -> Record {
        Record::TXT(self)
    }
}

impl fmt::Display for TXT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}
