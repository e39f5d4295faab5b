use crate::wire::{Header, Message, Question};
use std::fmt;
use thiserror::Error;

/// RCODE values this server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    YXDomain,
    YXRRSet,
    NXRRSet,
    NotAuth,
    NotZone,
}

impl ResponseCode {
    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormatError => 1,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused => 5,
            ResponseCode::YXDomain => 6,
            ResponseCode::YXRRSet => 7,
            ResponseCode::NXRRSet => 8,
            ResponseCode::NotAuth => 9,
            ResponseCode::NotZone => 10,
        }
    }

    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(ResponseCode::NoError),
            1 => Some(ResponseCode::FormatError),
            2 => Some(ResponseCode::ServerFailure),
            3 => Some(ResponseCode::NameError),
            4 => Some(ResponseCode::NotImplemented),
            5 => Some(ResponseCode::Refused),
            6 => Some(ResponseCode::YXDomain),
            7 => Some(ResponseCode::YXRRSet),
            8 => Some(ResponseCode::NXRRSet),
            9 => Some(ResponseCode::NotAuth),
            10 => Some(ResponseCode::NotZone),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormatError => "FORMERR",
            ResponseCode::ServerFailure => "SERVFAIL",
            ResponseCode::NameError => "NXDOMAIN",
            ResponseCode::NotImplemented => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::YXRRSet => "YXRRSET",
            ResponseCode::NXRRSet => "NXRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolution failure that is answered with an error RCODE.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("DNS error {rcode} (authoritative: {authoritative})")]
pub struct DnsError {
    pub rcode: ResponseCode,
    pub authoritative: bool,
}

impl DnsError {
    pub fn new(rcode: ResponseCode, authoritative: bool) -> Self {
        Self {
            rcode,
            authoritative,
        }
    }

    pub fn format_error() -> Self {
        Self::new(ResponseCode::FormatError, false)
    }

    pub fn server_failure() -> Self {
        Self::new(ResponseCode::ServerFailure, false)
    }

    pub fn not_implemented() -> Self {
        Self::new(ResponseCode::NotImplemented, false)
    }

    pub fn name_error(authoritative: bool) -> Self {
        Self::new(ResponseCode::NameError, authoritative)
    }

    /// Maps a raw upstream RCODE; codes above 10 become ServerFailure.
    pub fn from_upstream(rcode: u8, authoritative: bool) -> Self {
        let rcode = ResponseCode::from_u8(rcode).unwrap_or(ResponseCode::ServerFailure);
        Self::new(rcode, authoritative)
    }

    /// Error reply for request `id`. FormatError never echoes a question.
    pub fn to_message(&self, id: u16, question: Option<&Question>) -> Message {
        let header = Header::error(id, self.authoritative, self.rcode);
        let questions = match (self.rcode, question) {
            (ResponseCode::FormatError, _) | (_, None) => Vec::new(),
            (_, Some(question)) => vec![question.clone()],
        };
        Message::new(header, questions, Vec::new())
    }
}
