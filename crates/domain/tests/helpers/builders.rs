#![allow(dead_code)]
use tern_dns_domain::{Label, Message, Question, RecordType};

/// Wire bytes of a name: length-prefixed segments and the root terminator.
pub fn wire_name(dotted: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for segment in dotted.trim_end_matches('.').split('.') {
        out.push(segment.len() as u8);
        out.extend_from_slice(segment.as_bytes());
    }
    out.push(0);
    out
}

/// A recursive query for `name`/`qtype` with a fixed ID.
pub fn query_bytes(id: u16, name: &str, qtype: u16) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&id.to_be_bytes());
    out.extend_from_slice(&[0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    out.extend_from_slice(&wire_name(name));
    out.extend_from_slice(&qtype.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out
}

/// A response to `query_bytes(id, name, 1)` with one A answer whose owner
/// name is a pointer back to the question.
pub fn answer_bytes(id: u16, name: &str, ip: [u8; 4], ttl: u32) -> Vec<u8> {
    let mut out = query_bytes(id, name, 1);
    out[2] = 0x81;
    out[3] = 0x80;
    out[7] = 0x01;
    out.extend_from_slice(&[0xC0, 0x0C]);
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&4u16.to_be_bytes());
    out.extend_from_slice(&ip);
    out
}

pub fn question(name: &str, record_type: RecordType) -> Question {
    Question::new(Label::parse(name).unwrap(), record_type)
}

pub fn decode(bytes: &[u8]) -> Message {
    Message::decode(bytes).unwrap()
}
