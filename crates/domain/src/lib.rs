//! Tern DNS Domain Layer
pub mod config;
pub mod dns_error;
pub mod dns_record;
pub mod errors;
pub mod wire;
pub mod zone;

pub use config::{Config, ConfigError, FailurePolicy};
pub use dns_error::{DnsError, ResponseCode};
pub use dns_record::{DnsClass, QueryType, Record, RecordData, RecordType};
pub use errors::DomainError;
pub use wire::{Header, Label, Message, Question, ResourceRecord};
pub use zone::{Entry, Zone, ZoneMatch, ZoneSet};
