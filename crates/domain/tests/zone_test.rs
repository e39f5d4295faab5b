use std::net::Ipv4Addr;
use tern_dns_domain::dns_record::{A, MX};
use tern_dns_domain::{DomainError, Entry, Label, QueryType, Record, RecordType, Zone, ZoneMatch, ZoneSet};

fn name(text: &str) -> Label {
    Label::parse(text).unwrap()
}

fn example_zones(exclusive: bool) -> ZoneSet {
    let www = Entry::new().with_record(Record::A(A(Ipv4Addr::new(1, 2, 3, 4))));
    ZoneSet::new().with_zone("example.com", Zone::new(exclusive).with_entry("www", www))
}

#[test]
fn test_lookup_finds_entry() {
    let zones = example_zones(true);
    let ZoneMatch::Entry(entry) = zones.lookup(&name("www.example.com")) else {
        panic!("expected an entry");
    };
    assert_eq!(
        entry.records_for(QueryType::Record(RecordType::A)),
        vec![&Record::A(A(Ipv4Addr::new(1, 2, 3, 4)))]
    );
    assert!(entry.records_for(QueryType::Record(RecordType::AAAA)).is_empty());
}

#[test]
fn test_missing_name_in_exclusive_zone() {
    assert_eq!(
        example_zones(true).lookup(&name("missing.example.com")),
        ZoneMatch::NoEntry { exclusive: true }
    );
}

#[test]
fn test_missing_name_in_open_zone() {
    assert_eq!(
        example_zones(false).lookup(&name("missing.example.com")),
        ZoneMatch::NoEntry { exclusive: false }
    );
}

#[test]
fn test_unrelated_name_has_no_zone() {
    assert_eq!(example_zones(true).lookup(&name("www.example.org")), ZoneMatch::NoZone);
}

#[test]
fn test_meta_query_types() {
    let entry = Entry::new()
        .with_record(Record::A(A(Ipv4Addr::LOCALHOST)))
        .with_record(Record::MX(MX {
            priority: 5,
            exchange: name("mx.example.com"),
        }));
    assert!(entry.records_for(QueryType::ANY).is_empty());
    assert!(entry.records_for(QueryType::AXFR).is_empty());
    assert!(entry.records_for(QueryType::MAILB).is_empty());
    assert_eq!(entry.records_for(QueryType::Record(RecordType::MX)).len(), 1);
}

// ── zone file documents ──────────────────────────────────────────────────────

#[test]
fn test_from_toml() {
    let zones = ZoneSet::from_toml(
        r#"
        ["example.com"]
        Exclusive = true

        ["example.com".Entries.www]
        A = ["1.2.3.4", "1.2.3.5"]
        MX = ["mail.example.com 10"]
        TXT = ["hello world"]

        ["corp.internal"]
        exclusive = false

        ["corp.internal".entries.files]
        CNAME = ["storage.corp.internal"]
        "#,
    )
    .unwrap();

    assert_eq!(zones.len(), 2);
    let ZoneMatch::Entry(www) = zones.lookup(&name("www.example.com")) else {
        panic!("expected www entry");
    };
    assert_eq!(www.records_for(QueryType::Record(RecordType::A)).len(), 2);
    assert_eq!(www.records_for(QueryType::Record(RecordType::MX)).len(), 1);
    assert_eq!(
        zones.lookup(&name("other.example.com")),
        ZoneMatch::NoEntry { exclusive: true }
    );
    assert!(matches!(
        zones.lookup(&name("files.corp.internal")),
        ZoneMatch::Entry(_)
    ));
    assert_eq!(
        zones.lookup(&name("other.corp.internal")),
        ZoneMatch::NoEntry { exclusive: false }
    );
}

#[test]
fn test_defaults_to_open_zone() {
    let zones = ZoneSet::from_toml("[\"example.net\"]\n").unwrap();
    assert_eq!(
        zones.lookup(&name("www.example.net")),
        ZoneMatch::NoEntry { exclusive: false }
    );
}

#[test]
fn test_bad_record_text_names_the_zone() {
    let result = ZoneSet::from_toml(
        r#"
        ["example.com".Entries.www]
        A = ["not-an-address"]
        "#,
    );
    match result {
        Err(DomainError::InvalidZone { zone, .. }) => assert_eq!(zone, "example.com"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_unknown_record_list_is_rejected() {
    assert!(ZoneSet::from_toml(
        r#"
        ["example.com".Entries.www]
        HINFO = ["x y"]
        "#,
    )
    .is_err());
}
