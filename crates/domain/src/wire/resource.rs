use super::label::Label;
use crate::dns_record::{DnsClass, Record, RecordType};
use crate::errors::DomainError;
use std::fmt;

const FIXED_LEN: usize = 10;

/// One resource record as it travels on the wire.
///
/// `data` is the RDATA exactly as received (or as produced by `record`);
/// `record` is the typed view when the TYPE has a registered codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Label,
    pub rtype: RecordType,
    pub class: DnsClass,
    pub ttl: u32,
    pub data: Vec<u8>,
    pub record: Option<Record>,
}

impl ResourceRecord {
    pub fn new(name: Label, ttl: u32, record: Record) -> Self {
        Self {
            name,
            rtype: record.record_type(),
            class: DnsClass::IN,
            ttl,
            data: record.encode_wire(),
            record: Some(record),
        }
    }

    pub fn data_length(&self) -> usize {
        self.data.len()
    }

    /// Decodes one record at `offset`, returning it and the offset after it.
    pub fn decode(message: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        let (name, consumed) = Label::decode(message, offset)?;
        let fixed_start = offset + consumed;
        let fixed = message
            .get(fixed_start..fixed_start + FIXED_LEN)
            .ok_or_else(|| {
                DomainError::MessageTooShort(format!(
                    "resource record at offset {} is cut short",
                    offset
                ))
            })?;

        let rtype = RecordType::from_u16(u16::from_be_bytes([fixed[0], fixed[1]]));
        let class = DnsClass::from_u16(u16::from_be_bytes([fixed[2], fixed[3]]));
        let ttl = u32::from_be_bytes([fixed[4], fixed[5], fixed[6], fixed[7]]);
        let data_len = usize::from(u16::from_be_bytes([fixed[8], fixed[9]]));

        let data_start = fixed_start + FIXED_LEN;
        let data_end = data_start + data_len;
        let data = message.get(data_start..data_end).ok_or_else(|| {
            DomainError::MessageTooShort(format!(
                "RDATA of {} bytes at offset {} runs past the message",
                data_len, data_start
            ))
        })?;

        let record = Record::decode(rtype, message, data_start, data_len).transpose()?;

        Ok((
            Self {
                name,
                rtype,
                class,
                ttl,
                data: data.to_vec(),
                record,
            },
            data_end,
        ))
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        let rdata = match &self.record {
            Some(record) => record.encode_wire(),
            None => self.data.clone(),
        };
        self.name.encode_into(buf);
        buf.extend_from_slice(&self.rtype.to_u16().to_be_bytes());
        buf.extend_from_slice(&self.class.to_u16().to_be_bytes());
        buf.extend_from_slice(&self.ttl.to_be_bytes());
        let rdata_len = u16::try_from(rdata.len()).unwrap_or(u16::MAX);
        buf.extend_from_slice(&rdata_len.to_be_bytes());
        buf.extend_from_slice(&rdata[..usize::from(rdata_len)]);
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.name, self.ttl, self.class, self.rtype)?;
        match &self.record {
            Some(record) => write!(f, " {}", record),
            None => write!(f, " \\# {}", self.data.len()),
        }
    }
}
