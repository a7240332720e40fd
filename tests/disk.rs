//! Disk-primitive resource invariants.
//!
//! Whatever happens inside a disk measurement, the scratch file must not
//! survive the call and no descriptor may stay open. These tests exercise
//! the exit paths reachable without fault injection.

use std::fs;

use osbench::{measure_disk_write_at, MeasureError};

#[test]
fn success_leaves_no_scratch_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scratch.dat");

    match measure_disk_write_at(&path, 3) {
        Ok(ns) => assert!(ns > 0.0, "ns_per_op = {ns}"),
        // tmpfs and friends reject O_DIRECT; the invariant still applies.
        Err(MeasureError::Open(_)) => {}
        Err(other) => panic!("unexpected failure: {other}"),
    }
    assert!(!path.exists());
}

#[test]
fn open_failure_leaves_no_scratch_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scratch.dat");
    fs::write(&path, b"left over from a crashed run").unwrap();

    // Exclusive create fails on the pre-existing file...
    let result = measure_disk_write_at(&path, 3);
    assert!(matches!(result, Err(MeasureError::Open(_))));
    // ...and the stale file is removed on the way out.
    assert!(!path.exists());
}

#[test]
fn missing_parent_directory_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("scratch.dat");

    let result = measure_disk_write_at(&path, 3);
    assert!(matches!(result, Err(MeasureError::Open(_))));
    assert!(!path.exists());
}

#[test]
fn repeated_calls_do_not_accumulate_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scratch.dat");

    for _ in 0..5 {
        // Each call must fully tear down, or the next exclusive create
        // would fail with an unexpected EEXIST.
        match measure_disk_write_at(&path, 1) {
            Ok(_) | Err(MeasureError::Open(_)) => {}
            Err(other) => panic!("unexpected failure: {other}"),
        }
        assert!(!path.exists());
    }
}
