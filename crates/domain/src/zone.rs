//! Authoritative zone data and the suffix matcher over it.

pub mod document;

pub use document::{EntryDocument, ZoneDocument, ZoneFile};

use crate::dns_record::{QueryType, Record, RecordType};
use crate::wire::Label;
use std::collections::HashMap;

/// Records for one name inside a zone, grouped by type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    records: HashMap<RecordType, Vec<Record>>,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: Record) {
        self.records
            .entry(record.record_type())
            .or_default()
            .push(record);
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.insert(record);
        self
    }

    /// Records answering `qtype`, possibly none.
    pub fn records_for(&self, qtype: QueryType) -> Vec<&Record> {
        qtype
            .answer_types()
            .iter()
            .filter_map(|record_type| self.records.get(record_type))
            .flatten()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records.values().all(Vec::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Zone {
    pub exclusive: bool,
    entries: HashMap<String, Entry>,
}

impl Zone {
    pub fn new(exclusive: bool) -> Self {
        Self {
            exclusive,
            entries: HashMap::new(),
        }
    }

    /// `name` is relative to the apex, e.g. `www` or `a.b`.
    pub fn insert_entry(&mut self, name: &str, entry: Entry) {
        self.entries.insert(normalize_key(name), entry);
    }

    pub fn with_entry(mut self, name: &str, entry: Entry) -> Self {
        self.insert_entry(name, entry);
        self
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Outcome of looking a name up in the zone set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneMatch<'a> {
    /// No configured zone is a proper suffix of the name.
    NoZone,
    /// A zone matched but holds no entry for the name.
    NoEntry { exclusive: bool },
    Entry(&'a Entry),
}

/// All zones keyed by apex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneSet {
    zones: HashMap<String, Zone>,
}

impl ZoneSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, apex: &str, zone: Zone) {
        self.zones.insert(normalize_key(apex), zone);
    }

    pub fn with_zone(mut self, apex: &str, zone: Zone) -> Self {
        self.insert(apex, zone);
        self
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Finds the longest proper suffix of `name` that is a zone apex.
    ///
    /// Returns the zone and the index of the first segment of that suffix.
    pub fn match_zone(&self, name: &Label) -> Option<(&Zone, usize)> {
        (1..name.len()).find_map(|suffix_start| {
            self.zones
                .get(&name.lookup_key(suffix_start..name.len()))
                .map(|zone| (zone, suffix_start))
        })
    }

    pub fn match_entry<'a>(name: &Label, zone: &'a Zone, suffix_start: usize) -> Option<&'a Entry> {
        zone.entry(&name.lookup_key(0..suffix_start))
    }

    pub fn lookup(&self, name: &Label) -> ZoneMatch<'_> {
        let Some((zone, suffix_start)) = self.match_zone(name) else {
            return ZoneMatch::NoZone;
        };
        match Self::match_entry(name, zone, suffix_start) {
            Some(entry) => ZoneMatch::Entry(entry),
            None => ZoneMatch::NoEntry {
                exclusive: zone.exclusive,
            },
        }
    }
}

fn normalize_key(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns_record::A;
    use std::net::Ipv4Addr;

    fn name(text: &str) -> Label {
        Label::parse(text).unwrap()
    }

    #[test]
    fn test_longest_suffix_wins() {
        let set = ZoneSet::new()
            .with_zone("com", Zone::new(false))
            .with_zone("example.com", Zone::new(true));

        let (zone, start) = set.match_zone(&name("www.example.com")).unwrap();
        assert!(zone.exclusive);
        assert_eq!(start, 1);
    }

    #[test]
    fn test_apex_itself_is_not_matched() {
        let set = ZoneSet::new().with_zone("example.com", Zone::new(true));
        assert_eq!(set.lookup(&name("example.com")), ZoneMatch::NoZone);
    }

    #[test]
    fn test_multi_segment_entry_key() {
        let entry = Entry::new().with_record(Record::A(A(Ipv4Addr::new(10, 0, 0, 1))));
        let set = ZoneSet::new().with_zone(
            "example.com",
            Zone::new(false).with_entry("api.deep", entry.clone()),
        );
        assert_eq!(set.lookup(&name("api.deep.example.com")), ZoneMatch::Entry(&entry));
    }

    #[test]
    fn test_keys_are_case_folded() {
        let set = ZoneSet::new().with_zone("Example.COM.", Zone::new(true));
        let wire_name = Label::from_segments(["WWW", "EXAMPLE", "com"]).unwrap();
        assert_eq!(
            set.lookup(&wire_name),
            ZoneMatch::NoEntry { exclusive: true }
        );
    }
}
