// tests/store.rs
//
// Buffer persistence: round trip, recovery from missing/corrupt blobs.
//
use std::fs;
use std::path::PathBuf;

use grid_capture::buffer::Buffer;
use grid_capture::csv::serialize;
use grid_capture::snapshot::{Snapshot, SnapshotColumn, SnapshotRow};
use grid_capture::store::{self, BlobStore, FileStore, MemoryStore};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("grid_capture_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn sample() -> Buffer {
    let mut buf = Buffer::new();
    buf.merge(&Snapshot::new(
        vec![SnapshotColumn::new("c2", 1, "Age"), SnapshotColumn::new("c1", 0, "Name")],
        vec![
            SnapshotRow::new("r2", [("c1", "Bob")]),
            SnapshotRow::new("r1", [("c1", "Alice"), ("c2", "30")]),
        ],
    ));
    buf
}

#[test]
fn file_store_round_trip_keeps_buffer_and_csv() {
    let dir = tmp_dir("round_trip");
    let mut fs_store = FileStore::new(&dir);
    let buf = sample();

    store::save_buffer(&mut fs_store, "k", &buf).unwrap();
    assert!(fs_store.path_for("k").exists());

    let loaded = store::load_buffer(&fs_store, "k");
    assert_eq!(loaded, buf);
    assert_eq!(serialize(&loaded), serialize(&buf));
    assert_eq!(loaded.next_order(), 2);
}

#[test]
fn missing_key_loads_empty() {
    let dir = tmp_dir("missing");
    let fs_store = FileStore::new(&dir);
    assert_eq!(store::load_buffer(&fs_store, "nope"), Buffer::new());
    assert_eq!(store::load_buffer(&MemoryStore::new(), "nope"), Buffer::new());
}

#[test]
fn corrupt_blobs_load_empty() {
    let mut mem = MemoryStore::new();
    for (i, junk) in ["{not json", "", "[1,2,3]", "null", r#"{"cols": 5}"#].iter().enumerate() {
        let key = format!("k{i}");
        mem.set(&key, junk).unwrap();
        assert_eq!(store::load_buffer(&mem, &key), Buffer::new(), "blob {junk:?}");
    }
}

#[test]
fn partial_blob_fields_default() {
    let mut mem = MemoryStore::new();
    mem.set("k", r#"{"rows":{"r1":{"order":7,"cells":{"c1":"x"}}}}"#).unwrap();
    let buf = store::load_buffer(&mem, "k");
    assert_eq!(buf.row_count(), 1);
    assert_eq!(buf.column_count(), 0);
    // counter repaired past the stored order
    assert_eq!(buf.next_order(), 8);
}

#[test]
fn row_order_at_the_limit_loads_empty() {
    let mut mem = MemoryStore::new();
    mem.set("k", r#"{"cols":{"c1":{"index":0,"name":"A"}},
                    "rows":{"r1":{"order":18446744073709551615,"cells":{"c1":"x"}}},
                    "order":0}"#).unwrap();
    assert_eq!(store::load_buffer(&mem, "k"), Buffer::new());
}

#[test]
fn counter_at_the_limit_loads_empty_and_merges_again() {
    let mut mem = MemoryStore::new();
    mem.set("k", r#"{"cols":{"c1":{"index":0,"name":"A"}},
                    "rows":{"r1":{"order":3,"cells":{"c1":"x"}}},
                    "order":18446744073709551615}"#).unwrap();
    let mut buf = store::load_buffer(&mem, "k");
    assert_eq!(buf, Buffer::new());

    let added = buf.merge(&Snapshot::new(
        vec![SnapshotColumn::new("c1", 0, "A")],
        vec![SnapshotRow::new("r2", [("c1", "y")])],
    ));
    assert_eq!(added, 1);
    assert_eq!(buf.row("r2").unwrap().order, 0);
}

#[test]
fn delete_is_idempotent() {
    let dir = tmp_dir("delete");
    let mut fs_store = FileStore::new(&dir);
    store::save_buffer(&mut fs_store, "k", &sample()).unwrap();

    store::delete_buffer(&mut fs_store, "k").unwrap();
    store::delete_buffer(&mut fs_store, "k").unwrap();
    assert_eq!(fs_store.get("k").unwrap(), None);
}
