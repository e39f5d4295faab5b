use super::{rdata, Record, RecordData, RecordType};
use crate::errors::DomainError;
use std::fmt;

pub const CRITICAL_FLAG: u8 = 128;

/// Certification authority authorization, text form `flags tag value`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CAA {
    pub flags: u8,
    pub tag: String,
    pub value: Vec<u8>,
}

impl RecordData for CAA {
    const TYPE: RecordType = RecordType::CAA;

    fn parse_text(text: &str) -> Result<Self, DomainError> {
        let mut parts = text.splitn(3, ' ');
        let (Some(flags), Some(tag), Some(value)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(DomainError::record_text(
                Self::TYPE,
                text,
                "expected 'flags tag value'",
            ));
        };

        let flags = flags
            .parse::<u8>()
            .map_err(|e| DomainError::record_text(Self::TYPE, text, e.to_string()))?;
        if flags != CRITICAL_FLAG {
            return Err(DomainError::record_text(
                Self::TYPE,
                text,
                format!("flags must be {}", CRITICAL_FLAG),
            ));
        }
        if tag.len() > usize::from(u8::MAX) {
            return Err(DomainError::record_text(Self::TYPE, text, "tag too long"));
        }
        if value.len() > usize::from(u16::MAX) - 2 - tag.len() {
            return Err(DomainError::record_text(Self::TYPE, text, "value too long"));
        }

        Ok(CAA {
            flags,
            tag: tag.to_string(),
            value: value.as_bytes().to_vec(),
        })
    }

    fn encode_wire(&self, buf: &mut Vec<u8>) {
        buf.push(self.flags);
        buf.push(self.tag.len() as u8);
        buf.extend_from_slice(self.tag.as_bytes());
        buf.extend_from_slice(&self.value);
    }

    fn decode_wire(message: &[u8], start: usize, length: usize) -> Result<Self, DomainError> {
        let bytes = rdata(Self::TYPE, message, start, length)?;
        if bytes.len() < 2 {
            return Err(DomainError::record_data(Self::TYPE, "shorter than 2 bytes"));
        }
        let tag_end = 2 + usize::from(bytes[1]);
        let tag = bytes
            .get(2..tag_end)
            .ok_or_else(|| DomainError::record_data(Self::TYPE, "tag runs past RDATA"))?;
        let tag = std::str::from_utf8(tag)
            .map_err(|_| DomainError::record_data(Self::TYPE, "tag is not valid text"))?;

        Ok(CAA {
            flags: bytes[0],
            tag: tag.to_string(),
            value: bytes[tag_end..].to_vec(),
        })
    }

    fn into_record(self) -> Record {
        Record::CAA(self)
    }
}

impl fmt::Display for CAA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.flags,
            self.tag,
            String::from_utf8_lossy(&self.value)
        )
    }
}
