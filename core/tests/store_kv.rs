use shiftboard_core::store::file::FileStore;
use shiftboard_core::store::memory::MemoryStore;
use shiftboard_core::store::{keys, open_or_memory, KeyValueStore};

#[test]
fn file_store_roundtrips_values_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    assert_eq!(store.get(keys::ALERTS), None);
    store.set(keys::ALERTS, "[1,2,3]").unwrap();
    store.set(keys::CURRENT_USER, "{\"role\":\"qa\"}").unwrap();
    assert_eq!(store.get(keys::ALERTS).unwrap(), "[1,2,3]");
    assert_eq!(store.get(keys::CURRENT_USER).unwrap(), "{\"role\":\"qa\"}");

    store.set(keys::ALERTS, "[]").unwrap();
    assert_eq!(store.get(keys::ALERTS).unwrap(), "[]");
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set(keys::AUDIT_LOG, "[{\"action\":\"x\"}]").unwrap();
    }
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.get(keys::AUDIT_LOG).unwrap(), "[{\"action\":\"x\"}]");
}

#[test]
fn remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    store.set(keys::CURRENT_USER, "{}").unwrap();
    store.remove(keys::CURRENT_USER);
    assert_eq!(store.get(keys::CURRENT_USER), None);
    store.remove(keys::CURRENT_USER);
    assert_eq!(store.get(keys::CURRENT_USER), None);
}

#[test]
fn memory_store_covers_the_same_contract() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap(), "v");
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn unavailable_root_degrades_to_in_memory() {
    // A plain file cannot become the store root directory.
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let store = open_or_memory(blocker.path());
    store.borrow_mut().set(keys::ALERTS, "[]").unwrap();
    assert_eq!(store.borrow().get(keys::ALERTS).unwrap(), "[]");
}
