use super::*;
use crate::error::StorageError;
use crate::forms::{BlogForm, IndustryForm};
use crate::storage::MemoryStorage;
use time::macros::datetime;

const T0: OffsetDateTime = datetime!(2025-03-01 12:00:00 UTC);

struct BrokenStorage;

impl DraftStorage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Quota)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn blog() -> BlogForm {
    BlogForm {
        title: "Draft title".to_owned(),
        excerpt: "My First Post testing draft".to_owned(),
        selected_tag_ids: vec!["news".to_owned()],
        featured_image_id: Some("img-7".to_owned()),
        ..BlogForm::default()
    }
}

#[test]
fn new_store_uses_kind_storage_key() {
    let store: DraftStore<IndustryForm, _> = DraftStore::new(MemoryStorage::new());
    assert_eq!(store.key(), "industryDraft");
    assert_eq!(store.status(), DraftStatus::default());
}

#[test]
fn save_writes_snapshot_and_updates_status() {
    let storage = MemoryStorage::new();
    let mut store: DraftStore<BlogForm, _> = DraftStore::new(storage.clone());
    store.save(&blog(), T0).expect("save");

    let raw = storage.get("blog_draft_data").expect("get").expect("stored");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["excerpt"], "My First Post testing draft");
    assert_eq!(value["featuredImageId"], "img-7");
    assert_eq!(value["timestamp"], "2025-03-01T12:00:00Z");
    assert_eq!(
        store.status(),
        DraftStatus {
            draft_exists: true,
            last_saved_at: Some(T0)
        }
    );
}

#[test]
fn repeated_saves_differ_only_in_timestamp() {
    let mut store: DraftStore<BlogForm, _> = DraftStore::new(MemoryStorage::new());
    store.save(&blog(), T0).expect("save");
    let first = store.peek().expect("peek").expect("stored");
    store.save(&blog(), datetime!(2025-03-01 12:00:30 UTC)).expect("save");
    let second = store.peek().expect("peek").expect("stored");
    assert!(first.same_content(&second));
    assert_ne!(first.timestamp, second.timestamp);
}

#[test]
fn peek_and_load_round_trip_every_field() {
    let mut store: DraftStore<BlogForm, _> = DraftStore::new(MemoryStorage::new());
    store.save(&blog(), T0).expect("save");

    let mut reopened: DraftStore<BlogForm, _> = DraftStore::new(store.storage().clone());
    assert_eq!(reopened.status(), DraftStatus::default());
    let peeked = reopened.peek().expect("peek").expect("stored");
    assert_eq!(reopened.status(), DraftStatus::default());
    assert_eq!(peeked.data, blog());

    let loaded = reopened.load().expect("load").expect("stored");
    assert_eq!(loaded.data, blog());
    assert_eq!(reopened.status().last_saved_at, Some(T0));
}

#[test]
fn load_of_missing_draft_is_none() {
    let mut store: DraftStore<BlogForm, _> = DraftStore::new(MemoryStorage::new());
    assert!(store.load().expect("load").is_none());
    assert!(!store.exists());
}

#[test]
fn corrupt_snapshot_is_reported_not_panicked() {
    let storage = MemoryStorage::new();
    storage.set("blog_draft_data", "{\"title\": [").expect("set");
    let mut store: DraftStore<BlogForm, _> = DraftStore::new(storage);
    assert!(store.exists());
    let err = store.load().expect_err("corrupt");
    assert!(matches!(err, DraftError::Corrupt { ref key, .. } if key == "blog_draft_data"));
    assert_eq!(store.status(), DraftStatus::default());
}

#[test]
fn clear_is_idempotent() {
    let mut store: DraftStore<BlogForm, _> = DraftStore::new(MemoryStorage::new());
    store.clear().expect("clear absent");
    store.save(&blog(), T0).expect("save");
    store.clear().expect("clear");
    store.clear().expect("clear again");
    assert!(!store.exists());
    assert_eq!(store.status(), DraftStatus::default());
}

#[test]
fn storage_failures_surface_as_errors() {
    let mut store: DraftStore<BlogForm, _> = DraftStore::new(BrokenStorage);
    let err = store.save(&blog(), T0).expect_err("quota");
    assert!(matches!(err, DraftError::Storage(StorageError::Quota)));
    assert_eq!(store.status(), DraftStatus::default());
    assert!(!store.exists());
    assert!(store.clear().is_err());
}

#[test]
fn stores_for_different_kinds_do_not_collide() {
    let storage = MemoryStorage::new();
    let mut blog_store: DraftStore<BlogForm, _> = DraftStore::new(storage.clone());
    let industry_store: DraftStore<IndustryForm, _> = DraftStore::new(storage.clone());
    blog_store.save(&blog(), T0).expect("save");
    assert!(!industry_store.exists());
    assert_eq!(storage.len(), 1);
}
