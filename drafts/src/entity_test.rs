use super::*;

#[test]
fn storage_keys_match_persisted_layout() {
    assert_eq!(EntityKind::Blog.storage_key(), "blog_draft_data");
    assert_eq!(EntityKind::Industry.storage_key(), "industryDraft");
    assert_eq!(EntityKind::Project.storage_key(), "project_draft_data");
    assert_eq!(EntityKind::Service.storage_key(), "service_draft_data");
}

#[test]
fn storage_keys_are_distinct() {
    let mut keys: Vec<_> = EntityKind::ALL.iter().map(|k| k.storage_key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), EntityKind::ALL.len());
}

#[test]
fn industry_debounces_others_use_interval() {
    assert_eq!(
        EntityKind::Industry.autosave_policy(),
        AutosavePolicy::Debounce(time::Duration::seconds(2))
    );
    for kind in [EntityKind::Blog, EntityKind::Project, EntityKind::Service] {
        assert_eq!(kind.autosave_policy(), AutosavePolicy::Interval(time::Duration::seconds(30)));
    }
}

#[test]
fn parse_accepts_singular_plural_and_case() {
    assert_eq!("Blog".parse::<EntityKind>(), Ok(EntityKind::Blog));
    assert_eq!("industries".parse::<EntityKind>(), Ok(EntityKind::Industry));
    assert_eq!(" project ".parse::<EntityKind>(), Ok(EntityKind::Project));
    assert_eq!("SERVICES".parse::<EntityKind>(), Ok(EntityKind::Service));
}

#[test]
fn parse_rejects_unknown_kind() {
    let err = "page".parse::<EntityKind>().expect_err("page is not a kind");
    assert_eq!(err, UnknownEntityKind("page".to_owned()));
}

#[test]
fn display_round_trips_through_parse() {
    for kind in EntityKind::ALL {
        assert_eq!(kind.to_string().parse::<EntityKind>(), Ok(kind));
    }
}

#[test]
fn collections_are_plural_paths() {
    assert_eq!(EntityKind::Blog.collection(), "blogs");
    assert_eq!(EntityKind::Industry.collection(), "industries");
}
