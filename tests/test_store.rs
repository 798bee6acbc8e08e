//! Store tests: key resolution, atomic writes, JSON loading.

mod common;

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::json;
use trends_sdk::{Store, TrendsError};

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

#[test]
fn path_resolves_under_root() {
    let (sdk, tmp) = common::setup_empty_store();
    let path = sdk.store().path("output/growth_rates.json").unwrap();
    assert_eq!(path, tmp.path().join("output").join("growth_rates.json"));
}

#[test]
fn path_rejects_escaping_keys() {
    let (sdk, _tmp) = common::setup_empty_store();
    for key in ["../outside.json", "input/../../x", "/etc/passwd", ""] {
        let err = sdk.store().path(key).unwrap_err();
        assert!(matches!(err, TrendsError::InvalidArgument(_)), "key {:?}", key);
    }
}

#[test]
fn new_creates_missing_root() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("nested").join("store");
    let store = Store::new(Some(root.clone())).unwrap();
    assert!(root.is_dir());
    assert_eq!(store.root, root);
}

// ---------------------------------------------------------------------------
// Blobs
// ---------------------------------------------------------------------------

#[test]
fn write_blob_leaves_no_temp_file() {
    let (sdk, tmp) = common::setup_empty_store();
    sdk.store()
        .write_blob("input/trend_scores_update.csv", b"WORLD,Redis,2024-02-29,55\n")
        .unwrap();

    let dir = tmp.path().join("input");
    let names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["trend_scores_update.csv".to_string()]);
}

#[test]
fn write_blob_replaces_previous_contents() {
    let (sdk, _tmp) = common::setup_empty_store();
    let store = sdk.store();
    store.write_blob("notes.txt", b"first").unwrap();
    store.write_blob("notes.txt", b"second").unwrap();
    assert_eq!(store.read_string("notes.txt").unwrap(), "second");
}

#[test]
fn concurrent_writers_of_one_key_all_succeed() {
    let (sdk, tmp) = common::setup_empty_store();
    let store = sdk.store();
    let size = 512 * 1024;
    let a = vec![b'a'; size];
    let b = vec![b'b'; size];

    for _ in 0..20 {
        std::thread::scope(|s| {
            let wa = s.spawn(|| store.write_blob("input/x.csv", &a));
            let wb = s.spawn(|| store.write_blob("input/x.csv", &b));
            wa.join().unwrap().unwrap();
            wb.join().unwrap().unwrap();
        });

        let written = store.read_blob("input/x.csv").unwrap();
        assert_eq!(written.len(), size);
        assert!(written == a || written == b, "artifact mixes both writers");
    }

    let leftovers: Vec<String> = std::fs::read_dir(tmp.path().join("input"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(leftovers, vec!["x.csv".to_string()]);
}

#[test]
fn read_missing_key_is_not_found() {
    let (sdk, _tmp) = common::setup_empty_store();
    assert!(!sdk.store().exists("missing.csv"));
    let err = sdk.store().read_blob("missing.csv").unwrap_err();
    assert!(matches!(err, TrendsError::NotFound(_)));
}

#[test]
fn remove_is_idempotent() {
    let (sdk, _tmp) = common::setup_empty_store();
    let store = sdk.store();
    store.write_blob("a.txt", b"x").unwrap();
    store.remove("a.txt").unwrap();
    store.remove("a.txt").unwrap();
    assert!(!store.exists("a.txt"));
}

#[test]
fn clear_removes_everything() {
    let (sdk, _tmp) = common::setup_sample_store();
    let store = sdk.store();
    store.clear().unwrap();
    assert!(store.root.is_dir());
    assert!(!store.exists("output/topic_entities.json"));
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[test]
fn load_json_reads_written_value() {
    let (sdk, _tmp) = common::setup_empty_store();
    let value = json!({"terms": [], "geos": ["US"]});
    sdk.store().write_json("output/x.json", &value).unwrap();
    assert_eq!(sdk.store().load_json("output/x.json").unwrap(), value);
}

#[test]
fn load_json_decompresses_gz_keys() {
    let (sdk, _tmp) = common::setup_empty_store();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(br#"{"geos": ["DE"]}"#).unwrap();
    let bytes = encoder.finish().unwrap();
    sdk.store().write_blob("output/entities.json.gz", &bytes).unwrap();

    let value = sdk.store().load_json("output/entities.json.gz").unwrap();
    assert_eq!(value, json!({"geos": ["DE"]}));
}

#[test]
fn corrupt_json_is_invalid_data_and_kept() {
    let (sdk, _tmp) = common::setup_empty_store();
    sdk.store().write_blob("output/bad.json", b"{\"terms\": [").unwrap();

    let err = sdk.store().load_json("output/bad.json").unwrap_err();
    assert!(matches!(err, TrendsError::InvalidData(_)));
    assert!(sdk.store().exists("output/bad.json"));
}

#[test]
fn load_json_as_reports_shape_mismatch() {
    let (sdk, _tmp) = common::setup_empty_store();
    sdk.store().write_json("output/rates.json", &json!({"not": "a list"})).unwrap();
    let err = sdk
        .store()
        .load_json_as::<Vec<trends_sdk::models::GrowthRate>>("output/rates.json")
        .unwrap_err();
    assert!(matches!(err, TrendsError::InvalidData(_)));
}
