use crate::dns_error::ResponseCode;
use crate::errors::DomainError;
use ring::rand::{SecureRandom, SystemRandom};
use std::time::{SystemTime, UNIX_EPOCH};

pub const HEADER_LEN: usize = 12;

const QR: u16 = 0x8000;
const OPCODE_MASK: u16 = 0x7800;
const AA: u16 = 0x0400;
const TC: u16 = 0x0200;
const RD: u16 = 0x0100;
const RA: u16 = 0x0080;
const Z_MASK: u16 = 0x0070;
const RCODE_MASK: u16 = 0x000F;

/// The fixed 12-byte message header. `flags` holds the raw second word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn query(recursion_desired: bool) -> Self {
        Self {
            id: next_query_id(),
            flags: if recursion_desired { RD } else { 0 },
            ..Self::default()
        }
    }

    pub fn error(id: u16, authoritative: bool, rcode: ResponseCode) -> Self {
        let mut flags = QR | RA | u16::from(rcode.to_u8());
        if authoritative {
            flags |= AA;
        }
        Self {
            id,
            flags,
            ..Self::default()
        }
    }

    pub fn answer(id: u16, authoritative: bool, recursion_desired: bool) -> Self {
        let mut flags = QR | RA;
        if authoritative {
            flags |= AA;
        }
        if recursion_desired {
            flags |= RD;
        }
        Self {
            id,
            flags,
            ..Self::default()
        }
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DomainError> {
        if bytes.len() < HEADER_LEN {
            return Err(DomainError::MessageTooShort(format!(
                "header needs {} bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }
        let word = |i: usize| u16::from_be_bytes([bytes[i], bytes[i + 1]]);
        Ok(Self {
            id: word(0),
            flags: word(2),
            question_count: word(4),
            answer_count: word(6),
            authority_count: word(8),
            additional_count: word(10),
        })
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        for word in [
            self.id,
            self.flags,
            self.question_count,
            self.answer_count,
            self.authority_count,
            self.additional_count,
        ] {
            buf.extend_from_slice(&word.to_be_bytes());
        }
    }

    #[inline]
    pub fn is_response(&self) -> bool {
        self.flags & QR != 0
    }

    #[inline]
    pub fn opcode(&self) -> u8 {
        ((self.flags & OPCODE_MASK) >> 11) as u8
    }

    #[inline]
    pub fn authoritative_answer(&self) -> bool {
        self.flags & AA != 0
    }

    #[inline]
    pub fn truncated(&self) -> bool {
        self.flags & TC != 0
    }

    #[inline]
    pub fn recursion_desired(&self) -> bool {
        self.flags & RD != 0
    }

    #[inline]
    pub fn recursion_available(&self) -> bool {
        self.flags & RA != 0
    }

    /// True when the three reserved Z bits are all clear.
    #[inline]
    pub fn zero_bits(&self) -> bool {
        self.flags & Z_MASK == 0
    }

    /// Raw 4-bit RCODE, 0..=15.
    #[inline]
    pub fn response_code(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }
}

fn next_query_id() -> u16 {
    let mut bytes = [0u8; 2];
    match SystemRandom::new().fill(&mut bytes) {
        Ok(()) => u16::from_be_bytes(bytes),
        Err(_) => {
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64;
            fastrand::Rng::with_seed(seed).u16(..)
        }
    }
}
