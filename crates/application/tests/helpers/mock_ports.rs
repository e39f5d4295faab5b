#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tern_dns_application::ports::{RecordCache, UpstreamResolver};
use tern_dns_domain::dns_record::A;
use tern_dns_domain::{
    DnsError, Label, QueryType, Question, Record, ResourceRecord,
};
use tokio::sync::RwLock;

pub fn a_record(name: &str, ip: [u8; 4], ttl: u32) -> ResourceRecord {
    ResourceRecord::new(
        Label::parse(name).unwrap(),
        ttl,
        Record::A(A(Ipv4Addr::from(ip))),
    )
}

/// Upstream that answers from a table keyed by lowercase question name.
#[derive(Clone, Default)]
pub struct MockUpstream {
    responses: Arc<RwLock<HashMap<String, Result<Vec<ResourceRecord>, DnsError>>>>,
    calls: Arc<AtomicUsize>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, name: &str, records: Vec<ResourceRecord>) {
        self.responses
            .write()
            .await
            .insert(name.to_string(), Ok(records));
    }

    pub async fn set_error(&self, name: &str, error: DnsError) {
        self.responses
            .write()
            .await
            .insert(name.to_string(), Err(error));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstream {
    async fn resolve(&self, question: &Question) -> Result<Vec<ResourceRecord>, DnsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = question.name.lookup_key(0..question.name.len());
        self.responses
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Cache that stores whatever it is given, ignoring TTLs.
#[derive(Clone, Default)]
pub struct MockCache {
    entries: Arc<RwLock<HashMap<(String, QueryType), Vec<ResourceRecord>>>>,
    puts: Arc<RwLock<Vec<Vec<ResourceRecord>>>>,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn preload(&self, record: ResourceRecord) {
        let key = (
            record.name.lookup_key(0..record.name.len()),
            QueryType::Record(record.rtype),
        );
        self.entries.write().await.entry(key).or_default().push(record);
    }

    pub async fn puts(&self) -> Vec<Vec<ResourceRecord>> {
        self.puts.read().await.clone()
    }
}

#[async_trait]
impl RecordCache for MockCache {
    async fn get(&self, name: &Label, qtype: QueryType) -> Vec<ResourceRecord> {
        let key = (name.lookup_key(0..name.len()), qtype);
        self.entries
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }

    async fn put(&self, records: Vec<ResourceRecord>) {
        for record in &records {
            self.preload(record.clone()).await;
        }
        self.puts.write().await.push(records);
    }
}
