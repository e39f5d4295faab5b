use super::{embedded_name, rdata, read_u16, Record, RecordData, RecordType};
use crate::errors::DomainError;
use crate::wire::Label;
use std::fmt;

/// Mail exchanger, text form `exchange priority`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MX {
    pub priority: u16,
    pub exchange: Label,
}

impl RecordData for MX {
    const TYPE: RecordType = RecordType::MX;

    fn parse_text(text: &str) -> Result<Self, DomainError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let [exchange, priority] = fields[..] else {
            return Err(DomainError::record_text(
                Self::TYPE,
                text,
                "expected 'exchange priority'",
            ));
        };
        let exchange = Label::parse(exchange)
            .map_err(|e| DomainError::record_text(Self::TYPE, text, e.to_string()))?;
        let priority = priority
            .parse::<u16>()
            .map_err(|e| DomainError::record_text(Self::TYPE, text, e.to_string()))?;
        Ok(MX { priority, exchange })
    }

    fn encode_wire(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.priority.to_be_bytes());
        self.exchange.encode_into(buf);
    }

    fn decode_wire(message: &[u8], start: usize, length: usize) -> Result<Self, DomainError> {
        let bytes = rdata(Self::TYPE, message, start, length)?;
        if bytes.len() < 2 {
            return Err(DomainError::record_data(Self::TYPE, "shorter than 2 bytes"));
        }
        let (exchange, _) = embedded_name(Self::TYPE, message, start + 2, start, length)?;
        Ok(MX {
            priority: read_u16(bytes, 0),
            exchange,
        })
    }

    fn into_record(self) -> Record {
        Record::MX(self)
    }
}

impl fmt::Display for MX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.exchange, self.priority)
    }
}
