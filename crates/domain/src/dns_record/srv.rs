use super::{embedded_name, rdata, read_u16, Record, RecordData, RecordType};
use crate::errors::DomainError;
use crate::wire::Label;
use std::fmt;

/// Service location, text form `priority weight port target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SRV {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: Label,
}

impl RecordData for SRV {
    const TYPE: RecordType = RecordType::SRV;

    fn parse_text(text: &str) -> Result<Self, DomainError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let [priority, weight, port, target] = fields[..] else {
            return Err(DomainError::record_text(
                Self::TYPE,
                text,
                "expected 'priority weight port target'",
            ));
        };
        let number = |field: &str| {
            field
                .parse::<u16>()
                .map_err(|e| DomainError::record_text(Self::TYPE, text, e.to_string()))
        };
        Ok(SRV {
            priority: number(priority)?,
            weight: number(weight)?,
            port: number(port)?,
            target: Label::parse(target)
                .map_err(|e| DomainError::record_text(Self::TYPE, text, e.to_string()))?,
        })
    }

    fn encode_wire(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.priority.to_be_bytes());
        buf.extend_from_slice(&self.weight.to_be_bytes());
        buf.extend_from_slice(&self.port.to_be_bytes());
        self.target.encode_into(buf);
    }

    fn decode_wire(message: &[u8], start: usize, length: usize) -> Result<Self, DomainError> {
        let bytes = rdata(Self::TYPE, message, start, length)?;
        if bytes.len() < 6 {
            return Err(DomainError::record_data(Self::TYPE, "shorter than 6 bytes"));
        }
        let (target, _) = embedded_name(Self::TYPE, message, start + 6, start, length)?;
        Ok(SRV {
            priority: read_u16(bytes, 0),
            weight: read_u16(bytes, 2),
            port: read_u16(bytes, 4),
            target,
        })
    }

    fn into_record(self) -> Record {
        Record::SRV(self)
    }
}

impl fmt::Display for SRV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}
