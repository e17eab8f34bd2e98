use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    storage.set("token", "abc").unwrap();
    assert_eq!(storage.get("token").as_deref(), Some("abc"));
    storage.remove("token");
    assert_eq!(storage.get("token"), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set("user", "one").unwrap();
    storage.set("user", "two").unwrap();
    assert_eq!(storage.get("user").as_deref(), Some("two"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("nothing");
    assert!(storage.is_empty());
}

#[test]
fn default_storage_is_empty_outside_browser() {
    let storage = default_storage();
    assert_eq!(storage.get("token"), None);
}
