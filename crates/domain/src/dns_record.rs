pub mod a;
pub mod aaaa;
pub mod caa;
pub mod mx;
pub mod names;
pub mod record_type;
pub mod registry;
pub mod soa;
pub mod srv;
pub mod txt;

pub use a::A;
pub use aaaa::AAAA;
pub use caa::CAA;
pub use mx::MX;
pub use names::{CNAME, NS, PTR};
pub use record_type::{DnsClass, QueryType, RecordType};
pub use registry::{codec_for, RecordCodec};
pub use soa::SOA;
pub use srv::SRV;
pub use txt::TXT;

use crate::errors::DomainError;
use crate::wire::Label;
use std::fmt;

/// Typed RDATA for one record type.
pub trait RecordData: Sized + fmt::Display {
    const TYPE: RecordType;

    fn parse_text(text: &str) -> Result<Self, DomainError>;

    fn encode_wire(&self, buf: &mut Vec<u8>);

    /// Decodes `length` bytes of RDATA at `start` of the full `message`.
    fn decode_wire(message: &[u8], start: usize, length: usize) -> Result<Self, DomainError>;

    fn into_record(self) -> Record;
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    A(A),
    AAAA(AAAA),
    CAA(CAA),
    CNAME(CNAME),
    MX(MX),
    NS(NS),
    PTR(PTR),
    SOA(SOA),
    SRV(SRV),
    TXT(TXT),
}

impl Record {
    pub fn record_type(&self) -> RecordType {
        match self {
            Record::A(_) => RecordType::A,
            Record::AAAA(_) => RecordType::AAAA,
            Record::CAA(_) => RecordType::CAA,
            Record::CNAME(_) => RecordType::CNAME,
            Record::MX(_) => RecordType::MX,
            Record::NS(_) => RecordType::NS,
            Record::PTR(_) => RecordType::PTR,
            Record::SOA(_) => RecordType::SOA,
            Record::SRV(_) => RecordType::SRV,
            Record::TXT(_) => RecordType::TXT,
        }
    }

    pub fn encode_wire(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(32);
        match self {
            Record::A(r) => r.encode_wire(&mut buf),
            Record::AAAA(r) => r.encode_wire(&mut buf),
            Record::CAA(r) => r.encode_wire(&mut buf),
            Record::CNAME(r) => r.encode_wire(&mut buf),
            Record::MX(r) => r.encode_wire(&mut buf),
            Record::NS(r) => r.encode_wire(&mut buf),
            Record::PTR(r) => r.encode_wire(&mut buf),
            Record::SOA(r) => r.encode_wire(&mut buf),
            Record::SRV(r) => r.encode_wire(&mut buf),
            Record::TXT(r) => r.encode_wire(&mut buf),
        }
        buf
    }

    pub fn parse(record_type: RecordType, text: &str) -> Result<Self, DomainError> {
        let codec = codec_for(record_type)
            .ok_or_else(|| DomainError::UnsupportedRecordType(record_type.to_string()))?;
        (codec.parse)(text)
    }

    /// `None` when `record_type` has no registered codec.
    pub fn decode(
        record_type: RecordType,
        message: &[u8],
        start: usize,
        length: usize,
    ) -> Option<Result<Self, DomainError>> {
        codec_for(record_type).map(|codec| (codec.decode)(message, start, length))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::A(r) => fmt::Display::fmt(r, f),
            Record::AAAA(r) => fmt::Display::fmt(r, f),
            Record::CAA(r) => fmt::Display::fmt(r, f),
            Record::CNAME(r) => fmt::Display::fmt(r, f),
            Record::MX(r) => fmt::Display::fmt(r, f),
            Record::NS(r) => fmt::Display::fmt(r, f),
            Record::PTR(r) => fmt::Display::fmt(r, f),
            Record::SOA(r) => fmt::Display::fmt(r, f),
            Record::SRV(r) => fmt::Display::fmt(r, f),
            Record::TXT(r) => fmt::Display::fmt(r, f),
        }
    }
}

pub(crate) fn rdata<'a>(
    record_type: RecordType,
    message: &'a [u8],
    start: usize,
    length: usize,
) -> Result<&'a [u8], DomainError> {
    message
        .get(start..start + length)
        .ok_or_else(|| DomainError::record_data(record_type, "RDATA runs past the message"))
}

/// Decodes a name embedded in RDATA; it must end at or before `start + length`.
pub(crate) fn embedded_name(
    record_type: RecordType,
    message: &[u8],
    offset: usize,
    start: usize,
    length: usize,
) -> Result<(Label, usize), DomainError> {
    let (name, consumed) = Label::decode(message, offset)?;
    if offset + consumed > start + length {
        return Err(DomainError::record_data(
            record_type,
            "embedded name is longer than RDATA",
        ));
    }
    Ok((name, consumed))
}

pub(crate) fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([bytes[at], bytes[at + 1]])
}

pub(crate) fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
