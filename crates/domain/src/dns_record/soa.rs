use super::{embedded_name, read_u32, Record, RecordData, RecordType};
use crate::errors::DomainError;
use crate::wire::Label;
use std::fmt;

const TIMERS_LEN: usize = 20;

/// Start of authority, text form
/// `mname rname serial refresh retry expire minimum`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SOA {
    pub mname: Label,
    pub rname: Label,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl RecordData for SOA {
    const TYPE: RecordType = RecordType::SOA;

    fn parse_text(text: &str) -> Result<Self, DomainError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let [mname, rname, serial, refresh, retry, expire, minimum] = fields[..] else {
            return Err(DomainError::record_text(
                Self::TYPE,
                text,
                "expected 'mname rname serial refresh retry expire minimum'",
            ));
        };
        let name = |field: &str| {
            Label::parse(field).map_err(|e| DomainError::record_text(Self::TYPE, text, e.to_string()))
        };
        let number = |field: &str| {
            field
                .parse::<u32>()
                .map_err(|e| DomainError::record_text(Self::TYPE, text, e.to_string()))
        };
        Ok(SOA {
            mname: name(mname)?,
            rname: name(rname)?,
            serial: number(serial)?,
            refresh: number(refresh)?,
            retry: number(retry)?,
            expire: number(expire)?,
            minimum: number(minimum)?,
        })
    }

    fn encode_wire(&self, buf: &mut Vec<u8>) {
        self.mname.encode_into(buf);
        self.rname.encode_into(buf);
        for value in [
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum,
        ] {
            buf.extend_from_slice(&value.to_be_bytes());
        }
    }

    fn decode_wire(message: &[u8], start: usize, length: usize) -> Result<Self, DomainError> {
        let (mname, m) = embedded_name(Self::TYPE, message, start, start, length)?;
        let (rname, r) = embedded_name(Self::TYPE, message, start + m, start, length)?;
        if length - m - r != TIMERS_LEN {
            return Err(DomainError::record_data(
                Self::TYPE,
                format!("expected {} bytes of timers, got {}", TIMERS_LEN, length - m - r),
            ));
        }
        let timers = super::rdata(Self::TYPE, message, start + m + r, TIMERS_LEN)?;
        Ok(SOA {
            mname,
            rname,
            serial: read_u32(timers, 0),
            refresh: read_u32(timers, 4),
            retry: read_u32(timers, 8),
            expire: read_u32(timers, 12),
            minimum: read_u32(timers, 16),
        })
    }

    fn into_record(self) -> Record {
        Record::SOA(self)
    }
}

impl fmt::Display for SOA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}
