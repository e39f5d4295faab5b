use super::{Entry, Zone, ZoneSet};
use crate::dns_record::{Record, RecordType};
use crate::errors::DomainError;
use serde::Deserialize;
use std::collections::HashMap;

/// The zone file: one table per zone apex.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ZoneFile(pub HashMap<String, ZoneDocument>);

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoneDocument {
    #[serde(default, rename = "Exclusive", alias = "exclusive")]
    pub exclusive: bool,

    #[serde(default, rename = "Entries", alias = "entries")]
    pub entries: HashMap<String, EntryDocument>,
}

/// Text forms of the records for one entry, keyed by type mnemonic.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryDocument {
    #[serde(default, rename = "A")]
    pub a: Vec<String>,
    #[serde(default, rename = "AAAA")]
    pub aaaa: Vec<String>,
    #[serde(default, rename = "CAA")]
    pub caa: Vec<String>,
    #[serde(default, rename = "CNAME")]
    pub cname: Vec<String>,
    #[serde(default, rename = "MX")]
    pub mx: Vec<String>,
    #[serde(default, rename = "NS")]
    pub ns: Vec<String>,
    #[serde(default, rename = "PTR")]
    pub ptr: Vec<String>,
    #[serde(default, rename = "SOA")]
    pub soa: Vec<String>,
    #[serde(default, rename = "SRV")]
    pub srv: Vec<String>,
    #[serde(default, rename = "TXT")]
    pub txt: Vec<String>,
}

impl EntryDocument {
    fn texts(&self) -> [(RecordType, &[String]); 10] {
        [
            (RecordType::A, self.a.as_slice()),
            (RecordType::AAAA, self.aaaa.as_slice()),
            (RecordType::CAA, self.caa.as_slice()),
            (RecordType::CNAME, self.cname.as_slice()),
            (RecordType::MX, self.mx.as_slice()),
            (RecordType::NS, self.ns.as_slice()),
            (RecordType::PTR, self.ptr.as_slice()),
            (RecordType::SOA, self.soa.as_slice()),
            (RecordType::SRV, self.srv.as_slice()),
            (RecordType::TXT, self.txt.as_slice()),
        ]
    }

    pub fn to_entry(&self) -> Result<Entry, DomainError> {
        let mut entry = Entry::new();
        for (record_type, texts) in self.texts() {
            for text in texts {
                entry.insert(Record::parse(record_type, text)?);
            }
        }
        Ok(entry)
    }
}

impl ZoneDocument {
    pub fn to_zone(&self) -> Result<Zone, DomainError> {
        let mut zone = Zone::new(self.exclusive);
        for (name, document) in &self.entries {
            zone.insert_entry(name, document.to_entry()?);
        }
        Ok(zone)
    }
}

impl TryFrom<ZoneFile> for ZoneSet {
    type Error = DomainError;

    fn try_from(file: ZoneFile) -> Result<Self, Self::Error> {
        let mut set = ZoneSet::new();
        for (apex, document) in &file.0 {
            let zone = document.to_zone().map_err(|e| DomainError::InvalidZone {
                zone: apex.clone(),
                reason: e.to_string(),
            })?;
            set.insert(apex, zone);
        }
        Ok(set)
    }
}

impl ZoneSet {
    pub fn from_toml(content: &str) -> Result<Self, DomainError> {
        let file: ZoneFile = toml::from_str(content).map_err(|e| DomainError::InvalidZone {
            zone: "<file>".to_string(),
            reason: e.to_string(),
        })?;
        ZoneSet::try_from(file)
    }
}
