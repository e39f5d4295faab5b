use super::record::CachedRecord;
use compact_str::CompactString;
use rustc_hash::{FxBuildHasher, FxHashMap};
use smallvec::SmallVec;
use std::collections::HashMap;
use tern_dns_domain::{Label, RecordType, ResourceRecord};
use tracing::debug;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Default)]
struct Node {
    children: HashMap<CompactString, NodeId, FxBuildHasher>,
    records: HashMap<RecordType, Vec<CachedRecord>, FxBuildHasher>,
}

/// Cached records arranged by reversed label path (`com` → `example` → `www`).
///
/// Nodes live in one arena and are never removed; expired records are
/// dropped when read, or by [`RecordTree::sweep_expired`].
pub struct RecordTree {
    nodes: Vec<Node>,
    len: usize,
    max_records: usize,
}

impl RecordTree {
    /// `max_records == 0` leaves the tree unbounded.
    pub fn new(max_records: usize) -> Self {
        Self {
            nodes: vec![Node::default()],
            len: 0,
            max_records,
        }
    }

    /// Number of stored records, expired ones included until they are evicted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Live records of `record_type` at `name`; expired ones are evicted.
    pub fn get(&mut self, name: &Label, record_type: RecordType, now: u64) -> Vec<ResourceRecord> {
        let Some(id) = self.find(name) else {
            return Vec::new();
        };
        let node = &mut self.nodes[id];
        let Some(stored) = node.records.get_mut(&record_type) else {
            return Vec::new();
        };

        let before = stored.len();
        stored.retain(|cached| !cached.is_expired(now));
        let evicted = before - stored.len();

        let answers = stored
            .iter()
            .map(|cached| cached.to_resource_record(name, now))
            .collect();
        if stored.is_empty() {
            node.records.remove(&record_type);
        }

        self.len -= evicted;
        if evicted > 0 {
            debug!(name = %name, record_type = %record_type, evicted, "Evicted expired records");
        }
        answers
    }

    /// Merges `records` into the list stored for `name`/`record_type`.
    ///
    /// A record already present keeps one copy with the later expiry. Returns
    /// how many new records were added.
    pub fn insert(
        &mut self,
        name: &Label,
        record_type: RecordType,
        records: Vec<CachedRecord>,
    ) -> usize {
        if records.is_empty() {
            return 0;
        }
        let id = self.find_or_create(name);
        let stored = self.nodes[id].records.entry(record_type).or_default();

        let mut added = 0;
        for incoming in records {
            match stored.iter_mut().find(|cached| cached.record == incoming.record) {
                Some(existing) => {
                    if incoming.expires_at() > existing.expires_at() {
                        *existing = incoming;
                    }
                }
                None => {
                    stored.push(incoming);
                    added += 1;
                }
            }
        }
        self.len += added;
        added
    }

    /// Stores upstream answers grouped by owner name and type.
    ///
    /// Records without a typed view or with a zero TTL are skipped. Returns
    /// how many records were added; refreshed duplicates do not count.
    pub fn put(&mut self, records: Vec<ResourceRecord>, now: u64) -> usize {
        let mut groups: FxHashMap<(Label, RecordType), Vec<CachedRecord>> = FxHashMap::default();
        for rr in records {
            let Some(record) = rr.record else {
                continue;
            };
            if rr.ttl == 0 {
                continue;
            }
            groups
                .entry((rr.name.to_lowercase(), rr.rtype))
                .or_default()
                .push(CachedRecord::new(record, rr.ttl, now));
        }

        let incoming: usize = groups.values().map(Vec::len).sum();
        if incoming == 0 || !self.make_room(incoming, now) {
            return 0;
        }

        groups
            .into_iter()
            .map(|((name, record_type), group)| self.insert(&name, record_type, group))
            .sum()
    }

    /// Drops every expired record in the tree and returns how many were removed.
    pub fn sweep_expired(&mut self, now: u64) -> usize {
        let mut removed = 0;
        for node in &mut self.nodes {
            node.records.retain(|_, stored| {
                let before = stored.len();
                stored.retain(|cached| !cached.is_expired(now));
                removed += before - stored.len();
                !stored.is_empty()
            });
        }
        self.len -= removed;
        removed
    }

    fn make_room(&mut self, incoming: usize, now: u64) -> bool {
        if self.max_records == 0 || self.len + incoming <= self.max_records {
            return true;
        }
        let swept = self.sweep_expired(now);
        let fits = self.len + incoming <= self.max_records;
        if !fits {
            debug!(
                stored = self.len,
                incoming,
                swept,
                max_records = self.max_records,
                "Cache full, dropping new records"
            );
        }
        fits
    }

    fn path(name: &Label) -> SmallVec<[CompactString; 8]> {
        (0..name.len())
            .rev()
            .map(|i| CompactString::from(name.lookup_key(i..i + 1)))
            .collect()
    }

    fn find(&self, name: &Label) -> Option<NodeId> {
        Self::path(name)
            .iter()
            .try_fold(ROOT, |id, segment| self.nodes[id].children.get(segment).copied())
    }

    fn find_or_create(&mut self, name: &Label) -> NodeId {
        let mut id = ROOT;
        for segment in Self::path(name) {
            id = match self.nodes[id].children.get(&segment) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[id].children.insert(segment, child);
                    child
                }
            };
        }
        id
    }
}
