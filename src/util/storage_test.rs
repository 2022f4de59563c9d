use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryStore::new().read("theme"), None);
}

#[test]
fn memory_store_write_then_read() {
    let store = MemoryStore::new();
    store.write("theme", "light").expect("memory writes succeed");
    assert_eq!(store.read("theme").as_deref(), Some("light"));
}

#[test]
fn memory_store_overwrites_existing_value() {
    let store = MemoryStore::with_entry("theme", "dark");
    store.write("theme", "light").expect("memory writes succeed");
    assert_eq!(store.read("theme").as_deref(), Some("light"));
    assert_eq!(store.read("other"), None);
}
