use lifeos_core::model::EntityKind;
use lifeos_core::state::{demo_store, load_snapshot, save_snapshot, SnapshotError};
use lifeos_core::EntityStore;

const NOW: i64 = 1_700_000_000_000;

#[test]
fn snapshot_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lifeos.json");
    let store = demo_store(NOW);

    save_snapshot(&store, &path).unwrap();
    let loaded = load_snapshot(&path).unwrap();

    assert_eq!(loaded, store);
}

#[test]
fn wire_shape_uses_camel_case_and_type_keys() {
    let raw = demo_store(NOW).to_json_string().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let mood = &value["moods"][0];
    assert_eq!(mood["level"], 4);
    assert_eq!(mood["contactIds"][0], "c3");
    assert!(value["moods"][1].get("contactIds").is_none());

    assert_eq!(value["notes"][0]["type"], "WORK");
    assert_eq!(value["notes"][0]["isPinned"], true);
    assert_eq!(value["subscriptions"][3]["currency"], "CNY");
    assert_eq!(value["contacts"][0]["frequencyTargetDays"], 7);
    assert_eq!(value["flow"][2]["status"], "reading");
}

#[test]
fn missing_collections_default_to_empty() {
    let store = EntityStore::from_json_str(r#"{"notes": []}"#).unwrap();
    assert!(store.is_empty());
}

#[test]
fn out_of_range_mood_level_is_rejected() {
    let raw = r#"{"moods":[{"id":"m1","level":6,"note":"","timestamp":1}]}"#;
    let err = EntityStore::from_json_str(raw).unwrap_err();
    assert!(matches!(err, SnapshotError::Json(_)));
}

#[test]
fn invalid_record_is_reported_with_its_kind_and_id() {
    let mut store = demo_store(NOW);
    store.contacts[0].frequency_target_days = 0;
    let raw = store.to_json_string().unwrap();

    let err = EntityStore::from_json_str(&raw).unwrap_err();
    match err {
        SnapshotError::InvalidRecord { kind, id, .. } => {
            assert_eq!(kind, EntityKind::Contact);
            assert_eq!(id, "c1");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_ids_within_a_kind_are_rejected() {
    let mut store = demo_store(NOW);
    let copy = store.notes[0].clone();
    store.notes.push(copy);

    let err = store.validate().unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::DuplicateId {
            kind: EntityKind::Note,
            ..
        }
    ));
}

#[test]
fn same_id_across_kinds_is_allowed() {
    let store = demo_store(NOW);
    assert!(store.moods.iter().any(|m| m.id == "1"));
    assert!(store.notes.iter().any(|n| n.id == "1"));
    store.validate().unwrap();
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_snapshot(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SnapshotError::Io(_)));
}
