use std::io::Write;
use tempfile::NamedTempFile;
use tern_dns_domain::{Label, ZoneMatch};
use tern_dns_infrastructure::zones::{ZoneLoadError, ZoneLoader};

fn zone_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_reads_zone_file() {
    let file = zone_file(
        r#"
        ["example.com"]
        Exclusive = true

        ["example.com".Entries.www]
        A = ["1.2.3.4"]
        "#,
    );

    let zones = ZoneLoader::read(file.path()).unwrap();
    assert_eq!(zones.len(), 1);
    assert!(matches!(
        zones.lookup(&Label::parse("www.example.com").unwrap()),
        ZoneMatch::Entry(_)
    ));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ZoneLoader::read(dir.path().join("zones.toml"));
    assert!(matches!(result, Err(ZoneLoadError::Read { .. })));
}

#[test]
fn test_bad_record_is_invalid() {
    let file = zone_file("[\"example.com\".Entries.www]\nAAAA = [\"1.2.3.4\"]\n");
    assert!(matches!(
        ZoneLoader::read(file.path()),
        Err(ZoneLoadError::Invalid(_))
    ));
}

#[test]
fn test_load_or_empty_degrades() {
    let broken = zone_file("this is not toml");
    assert!(ZoneLoader::load_or_empty(broken.path()).is_empty());

    let dir = tempfile::tempdir().unwrap();
    assert!(ZoneLoader::load_or_empty(dir.path().join("absent.toml")).is_empty());
}
