//! RFC 1035 wire format: names, header, question and record sections.
//!
//! Compression pointers are followed on decode and never emitted on encode.

pub mod header;
pub mod label;
pub mod message;
pub mod question;
pub mod resource;

pub use header::{Header, HEADER_LEN};
pub use label::{Label, MAX_SEGMENT_LEN};
pub use message::Message;
pub use question::Question;
pub use resource::ResourceRecord;
