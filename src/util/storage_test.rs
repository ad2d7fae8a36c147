use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_set_then_get() {
    let store = MemoryStorage::new();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_overwrites() {
    let store = MemoryStorage::new();
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("two"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_remove_missing_is_noop() {
    let store = MemoryStorage::new();
    store.remove("absent");
    assert!(store.is_empty());
}

#[test]
fn memory_storage_denied_write_leaves_value_untouched() {
    let store = MemoryStorage::new();
    store.set("k", "before").unwrap();
    store.deny_writes("k");
    let err = store.set("k", "after").unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == "k"));
    assert_eq!(store.get("k").as_deref(), Some("before"));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_unavailable_natively() {
    let store = BrowserStorage;
    assert_eq!(store.get("k"), None);
    assert_eq!(store.set("k", "v"), Err(StorageError::Unavailable));
    store.remove("k");
}
