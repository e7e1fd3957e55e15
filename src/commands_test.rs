use super::*;
use drafts::FileStorage;
use drafts::forms::{BlogForm, ServiceForm};
use time::Duration;
use time::macros::datetime;

const T0: OffsetDateTime = datetime!(2025-03-01 12:00:00 UTC);

fn valid_blog() -> BlogForm {
    BlogForm {
        title: "Launch notes".to_owned(),
        slug: "launch-notes".to_owned(),
        excerpt: "Everything that shipped this week".to_owned(),
        content: "<p>Details</p>".to_owned(),
        ..BlogForm::default()
    }
}

fn seeded_dir(form: &BlogForm) -> (tempfile::TempDir, FileStorage) {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open");
    let mut session: DraftSession<BlogForm, _> = DraftSession::new(&storage, T0);
    session.mount(T0);
    assert!(session.save_now(form, T0));
    (dir, storage)
}

// =============================================================
// list / show
// =============================================================

#[test]
fn list_reports_every_kind_in_order() {
    let (_dir, storage) = seeded_dir(&valid_blog());
    let rows = list(&storage, T0 + Duration::seconds(90));
    let kinds: Vec<_> = rows.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, EntityKind::ALL.to_vec());

    let blog = &rows[0];
    assert!(blog.exists);
    assert_eq!(blog.key, "blog_draft_data");
    assert_eq!(blog.saved_at, Some(T0));
    assert_eq!(blog.age_secs, Some(90));
    assert_eq!(blog.slug.as_deref(), Some("launch-notes"));
    assert_eq!(blog.valid, Some(true));
    assert!(rows[1..].iter().all(|r| !r.exists && r.valid.is_none()));
}

#[test]
fn corrupt_snapshot_is_listed_without_verdict() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open");
    storage.set("service_draft_data", "{not json").expect("seed");
    let row = summarize::<ServiceForm, _>(&storage, T0);
    assert!(row.exists);
    assert_eq!(row.valid, None);
    assert_eq!(row.saved_at, None);
}

#[test]
fn show_returns_flattened_snapshot() {
    let (_dir, storage) = seeded_dir(&valid_blog());
    let value = show::<BlogForm, _>(&storage).expect("show");
    assert_eq!(value["title"], "Launch notes");
    assert_eq!(value["timestamp"], "2025-03-01T12:00:00Z");
}

#[test]
fn show_missing_draft_is_no_draft() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open");
    assert!(matches!(
        show::<ServiceForm, _>(&storage),
        Err(CliError::NoDraft(EntityKind::Service))
    ));
}

// =============================================================
// clear / validate
// =============================================================

#[test]
fn clear_is_idempotent() {
    let (_dir, storage) = seeded_dir(&valid_blog());
    clear::<BlogForm, _>(&storage).expect("first clear");
    clear::<BlogForm, _>(&storage).expect("second clear");
    assert_eq!(storage.get("blog_draft_data").expect("get"), None);
}

#[test]
fn validate_lists_failed_fields() {
    let form = BlogForm {
        excerpt: "short".to_owned(),
        ..valid_blog()
    };
    let (_dir, storage) = seeded_dir(&form);
    match validate::<BlogForm, _>(&storage) {
        Err(CliError::Invalid(errors)) => assert!(errors.message_for("excerpt").is_some()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn validate_accepts_complete_draft() {
    let (_dir, storage) = seeded_dir(&valid_blog());
    assert!(validate::<BlogForm, _>(&storage).is_ok());
}

// =============================================================
// policies
// =============================================================

#[test]
fn policy_rows_describe_mode_and_period() {
    let row = policy_row(EntityKind::Industry, EntityKind::Industry.autosave_policy());
    assert_eq!(row.mode, "debounce");
    assert_eq!(row.period_secs, 2);
    let row = policy_row(EntityKind::Blog, EntityKind::Blog.autosave_policy());
    assert_eq!(row.mode, "interval");
    assert_eq!(row.period_secs, 30);
}

#[test]
fn with_form_picks_matching_type() {
    for kind in EntityKind::ALL {
        assert_eq!(with_form!(kind, F => F::KIND), kind);
    }
}
