use tipwell_storage::KeyValueStore;
use tipwell_storage::error::StorageError;
use tipwell_storage::file::FileStore;

#[test]
fn missing_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("store.json")).unwrap();
    assert_eq!(store.get("anything").unwrap(), None);
}

#[test]
fn writes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("store.json");

    {
        let store = FileStore::open(&path).unwrap();
        store.set("wellnessProfile", r#"{"age":25}"#).unwrap();
        store.set("tips:better sleep:25", "[]").unwrap();
        store.remove("tips:better sleep:25").unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(
        reopened.get("wellnessProfile").unwrap().as_deref(),
        Some(r#"{"age":25}"#)
    );
    assert_eq!(reopened.get("tips:better sleep:25").unwrap(), None);
}

#[test]
fn clear_empties_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let store = FileStore::open(&path).unwrap();
    store.set("a", "1").unwrap();
    store.clear().unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("a").unwrap(), None);
}

#[test]
fn corrupt_file_is_rejected_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }));
}

#[cfg(unix)]
#[test]
fn store_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let store = FileStore::open(&path).unwrap();
    store.set("a", "1").unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
