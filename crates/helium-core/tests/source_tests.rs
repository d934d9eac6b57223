// Rust guideline compliant 2026-10-14

//! Integration tests for the snapshot record source.

use helium_core::{RecordSource, ResourceKind, SnapshotSource};
use std::fs;
use tempfile::TempDir;

fn write_snapshot(dir: &TempDir) {
    fs::write(
        dir.path().join("sensor.json"),
        r#"{"data": [
            {"id": "aa11aa11-0000-4000-8000-000000000001", "type": "sensor",
             "attributes": {"name": "Kitchen"}, "meta": {"mac": "6081F9FFFE000001"}},
            {"id": "bb22bb22-0000-4000-8000-000000000002", "type": "sensor",
             "attributes": {"name": "Garage"}, "meta": {"mac": "6081F9FFFE000002"}}
        ]}"#,
    )
    .expect("write sensors");
    fs::write(
        dir.path().join("label.json"),
        r#"{"data": [
            {"id": "cc33cc33-0000-4000-8000-000000000003", "type": "label",
             "attributes": {"name": "Home"},
             "relationships": {"sensor": {"data": [
                {"id": "aa11aa11-0000-4000-8000-000000000001", "type": "sensor"},
                {"id": "dd44dd44-0000-4000-8000-000000000004", "type": "sensor"}
             ]}}}
        ]}"#,
    )
    .expect("write labels");
    fs::create_dir(dir.path().join("timeseries")).expect("create timeseries dir");
    fs::write(
        dir.path()
            .join("timeseries")
            .join("aa11aa11-0000-4000-8000-000000000001.json"),
        r#"{"data": [{"id": "ee55ee55-0000-4000-8000-000000000005", "type": "data-point",
            "attributes": {"timestamp": "2015-08-06T17:00:00Z", "port": "t", "value": 21.5}}]}"#,
    )
    .expect("write timeseries");
}

#[test]
fn test_list_reads_kind_document() {
    let dir = TempDir::new().expect("temp dir");
    write_snapshot(&dir);
    let source = SnapshotSource::new(dir.path()).expect("source");

    let sensors = source.list(ResourceKind::Sensor).expect("sensors");
    assert_eq!(sensors.len(), 2);
    assert_eq!(sensors[1].get_str("attributes/name"), Some("Garage"));
}

#[test]
fn test_missing_document_is_empty() {
    let dir = TempDir::new().expect("temp dir");
    let source = SnapshotSource::new(dir.path()).expect("source");

    assert!(source.list(ResourceKind::User).expect("users").is_empty());
    assert!(source.timeseries("nope").expect("timeseries").is_empty());
}

#[test]
fn test_invalid_document_is_error() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("user.json"), "not json").expect("write users");
    let source = SnapshotSource::new(dir.path()).expect("source");

    let err = source.list(ResourceKind::User).unwrap_err();
    assert!(err.to_string().contains("JSON error"));
}

#[test]
fn test_source_rejects_file_root() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("plain.txt");
    fs::write(&file, "").expect("write file");

    assert!(SnapshotSource::new(file).is_err());
}

#[test]
fn test_related_joins_and_keeps_unknown_ids() {
    let dir = TempDir::new().expect("temp dir");
    write_snapshot(&dir);
    let source = SnapshotSource::new(dir.path()).expect("source");

    let labels = source.list(ResourceKind::Label).expect("labels");
    let related = source
        .related(&labels[0], ResourceKind::Sensor)
        .expect("related sensors");
    assert_eq!(related.len(), 2);
    assert_eq!(related[0].get_str("attributes/name"), Some("Kitchen"));
    assert_eq!(related[1].id(), "dd44dd44-0000-4000-8000-000000000004");
    assert!(related[1].get("attributes").is_none());
}

#[test]
fn test_timeseries_reads_sensor_document() {
    let dir = TempDir::new().expect("temp dir");
    write_snapshot(&dir);
    let source = SnapshotSource::new(dir.path()).expect("source");

    let points = source
        .timeseries("aa11aa11-0000-4000-8000-000000000001")
        .expect("timeseries");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].get_str("attributes/port"), Some("t"));
}
