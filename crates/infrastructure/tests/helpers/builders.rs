#![allow(dead_code)]
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tern_dns_domain::dns_record::A;
use tern_dns_domain::{Header, Label, Message, Question, Record, RecordType, ResourceRecord};
use tern_dns_infrastructure::dns::Clock;

pub fn name(text: &str) -> Label {
    Label::parse(text).unwrap()
}

pub fn a_record(owner: &str, ip: [u8; 4], ttl: u32) -> ResourceRecord {
    ResourceRecord::new(name(owner), ttl, Record::A(A(Ipv4Addr::from(ip))))
}

pub fn query_bytes(id: u16, owner: &str, record_type: RecordType) -> Vec<u8> {
    let mut header = Header::query(true);
    header.id = id;
    Message::new(header, vec![Question::new(name(owner), record_type)], Vec::new()).encode()
}

/// Clock that only moves when told to.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn at(secs: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(secs)),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
