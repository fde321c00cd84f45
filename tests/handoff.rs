//! Single-use semantics of the handoff stores.

use std::collections::BTreeMap;

use stackform::core::handoff::{AppliedPayload, Filesystem, HandoffStore, Memory};
use tempfile::TempDir;

fn payload() -> AppliedPayload {
    AppliedPayload {
        env_vars: BTreeMap::from([("FOO".to_string(), "bar".to_string())]),
        suggested_modes: vec!["standalone".to_string()],
    }
}

#[test]
fn test_memory_take_once_consumes() {
    let store = Memory::new();
    let token = store.put(&payload()).unwrap();

    assert_eq!(store.take_once(&token).unwrap(), Some(payload()));
    assert_eq!(store.take_once(&token).unwrap(), None);
}

#[test]
fn test_fs_take_once_consumes() {
    let tmp = TempDir::new().unwrap();
    let store = Filesystem::at(tmp.path().to_path_buf()).unwrap();
    let token = store.put(&payload()).unwrap();

    assert_eq!(store.take_once(&token).unwrap(), Some(payload()));
    assert_eq!(store.take_once(&token).unwrap(), None);

    // The entry file is gone, not just emptied
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_fs_tokens_are_unique() {
    let tmp = TempDir::new().unwrap();
    let store = Filesystem::at(tmp.path().to_path_buf()).unwrap();

    let a = store.put(&payload()).unwrap();
    let b = store.put(&payload()).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_fs_rejects_path_like_tokens() {
    let tmp = TempDir::new().unwrap();
    let store = Filesystem::at(tmp.path().to_path_buf()).unwrap();

    assert_eq!(store.take_once("../../etc/passwd").unwrap(), None);
    assert_eq!(store.take_once("").unwrap(), None);
}

#[test]
fn test_fs_corrupt_entry_is_consumed_silently() {
    let tmp = TempDir::new().unwrap();
    let store = Filesystem::at(tmp.path().to_path_buf()).unwrap();

    std::fs::write(tmp.path().join("applied-bad-token.json"), "not json").unwrap();
    assert_eq!(store.take_once("bad-token").unwrap(), None);
    assert_eq!(store.take_once("bad-token").unwrap(), None);
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_payload_wire_shape_is_camel_case() {
    let json = serde_json::to_value(payload()).unwrap();
    assert_eq!(json["envVars"]["FOO"], "bar");
    assert_eq!(json["suggestedModes"][0], "standalone");
}
