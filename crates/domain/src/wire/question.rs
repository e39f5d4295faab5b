use super::label::Label;
use crate::dns_record::{DnsClass, QueryType};
use crate::errors::DomainError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub name: Label,
    pub qtype: QueryType,
    pub qclass: DnsClass,
}

impl Question {
    pub fn new(name: Label, qtype: impl Into<QueryType>) -> Self {
        Self {
            name,
            qtype: qtype.into(),
            qclass: DnsClass::IN,
        }
    }

    /// Decodes one question at `offset`, returning it and the offset after it.
    pub fn decode(message: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        let (name, consumed) = Label::decode(message, offset)?;
        let fixed = offset + consumed;
        let bytes = message.get(fixed..fixed + 4).ok_or_else(|| {
            DomainError::MessageTooShort(format!("question at offset {} is cut short", offset))
        })?;
        let question = Self {
            name,
            qtype: QueryType::from_u16(u16::from_be_bytes([bytes[0], bytes[1]])),
            qclass: DnsClass::from_u16(u16::from_be_bytes([bytes[2], bytes[3]])),
        };
        Ok((question, fixed + 4))
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        self.name.encode_into(buf);
        buf.extend_from_slice(&self.qtype.to_u16().to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_u16().to_be_bytes());
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.qclass, self.qtype)
    }
}
