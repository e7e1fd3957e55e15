use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("k").expect("get"), None);
    storage.set("k", "v1").expect("set");
    storage.set("k", "v2").expect("overwrite");
    assert_eq!(storage.get("k").expect("get"), Some("v2".to_owned()));
    assert_eq!(storage.len(), 1);
    storage.remove("k").expect("remove");
    assert!(storage.is_empty());
}

#[test]
fn memory_remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    storage.remove("absent").expect("remove is idempotent");
}

#[test]
fn memory_clones_share_state() {
    let tab_a = MemoryStorage::new();
    let tab_b = tab_a.clone();
    tab_a.set("k", "from a").expect("set");
    tab_b.set("k", "from b").expect("set");
    assert_eq!(tab_a.get("k").expect("get"), Some("from b".to_owned()));
}

#[test]
fn memory_quota_rejects_oversized_write_and_keeps_old_value() {
    let storage = MemoryStorage::with_quota(8);
    storage.set("k", "small").expect("fits");
    let err = storage.set("k", "much too large").expect_err("over quota");
    assert!(matches!(err, StorageError::Quota));
    assert_eq!(storage.get("k").expect("get"), Some("small".to_owned()));
}

#[test]
fn memory_quota_counts_replaced_value_once() {
    let storage = MemoryStorage::with_quota(8);
    storage.set("k", "12345678").expect("exactly at quota");
    storage.set("k", "87654321").expect("replacing same key fits");
}

// =============================================================
// FileStorage
// =============================================================

#[test]
fn file_set_get_remove() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open");
    storage.set("blog_draft_data", "{\"title\":\"x\"}").expect("set");
    assert_eq!(
        storage.get("blog_draft_data").expect("get"),
        Some("{\"title\":\"x\"}".to_owned())
    );
    assert!(dir.path().join("blog_draft_data.json").exists());
    storage.remove("blog_draft_data").expect("remove");
    assert_eq!(storage.get("blog_draft_data").expect("get"), None);
    storage.remove("blog_draft_data").expect("second remove is ok");
}

#[test]
fn file_write_leaves_no_temp_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open");
    storage.set("industryDraft", "{}").expect("set");
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("read_dir")
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["industryDraft.json".to_owned()]);
}

#[test]
fn file_open_creates_nested_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("a").join("b");
    let storage = FileStorage::open(&nested).expect("open");
    assert!(nested.is_dir());
    assert_eq!(storage.dir(), nested.as_path());
}

#[test]
fn file_rejects_path_like_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open");
    for key in ["", "../escape", "a/b", "with space"] {
        let err = storage.set(key, "x").expect_err("invalid key");
        assert!(matches!(err, StorageError::InvalidKey(_)), "key {key:?}");
    }
}

#[test]
fn borrowed_storage_delegates() {
    let storage = MemoryStorage::new();
    let borrowed: &MemoryStorage = &storage;
    DraftStorage::set(&borrowed, "k", "v").expect("set");
    assert_eq!(storage.get("k").expect("get"), Some("v".to_owned()));
}
