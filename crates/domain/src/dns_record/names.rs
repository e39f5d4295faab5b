use super::{embedded_name, Record, RecordData, RecordType};
use crate::errors::DomainError;
use crate::wire::Label;
use std::fmt;

macro_rules! name_record {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub Label);

        impl RecordData for $name {
            const TYPE: RecordType = RecordType::$name;

            fn parse_text(text: &str) -> Result<Self, DomainError> {
                Label::parse(text.trim())
                    .map($name)
                    .map_err(|e| DomainError::record_text(Self::TYPE, text, e.to_string()))
            }

            fn encode_wire(&self, buf: &mut Vec<u8>) {
                self.0.encode_into(buf);
            }

            fn decode_wire(
                message: &[u8],
                start: usize,
                length: usize,
            ) -> Result<Self, DomainError> {
                embedded_name(Self::TYPE, message, start, start, length)
                    .map(|(name, _)| $name(name))
            }

            fn into_record(self) -> Record {
                Record::$name(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

name_record!(
    /// Canonical name the owner is an alias of.
    CNAME
);
name_record!(
    /// Authoritative name server for the owner.
    NS
);
name_record!(PTR);
