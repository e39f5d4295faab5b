use crate::dns_record::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Label segment is {0} bytes, the limit is 63")]
    LabelTooLong(usize),

    #[error("Reserved label type in length byte {byte:#04x} at offset {offset}")]
    InvalidLabelLength { byte: u8, offset: usize },

    #[error("Read past end of message at offset {offset} (message is {len} bytes)")]
    OutOfBounds { offset: usize, len: usize },

    #[error("Compression pointer loop detected at offset {0}")]
    CompressionLoop(usize),

    #[error("Message too short: {0}")]
    MessageTooShort(String),

    #[error("Truncated messages are not supported")]
    TruncatedMessage,

    #[error("Invalid {record_type} record data: {reason}")]
    InvalidRecordData {
        record_type: RecordType,
        reason: String,
    },

    #[error("Invalid {record_type} record text '{text}': {reason}")]
    InvalidRecordText {
        record_type: RecordType,
        text: String,
        reason: String,
    },

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid zone '{zone}': {reason}")]
    InvalidZone { zone: String, reason: String },
}

impl DomainError {
    pub(crate) fn record_text(
        record_type: RecordType,
        text: &str,
        reason: impl Into<String>,
    ) -> Self {
        DomainError::InvalidRecordText {
            record_type,
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn record_data(record_type: RecordType, reason: impl Into<String>) -> Self {
        DomainError::InvalidRecordData {
            record_type,
            reason: reason.into(),
        }
    }
}
