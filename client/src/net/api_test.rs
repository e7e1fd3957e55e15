use super::*;

#[test]
fn collection_endpoint_uses_plural_collection() {
    assert_eq!(collection_endpoint(EntityKind::Blog), "/api/blogs");
    assert_eq!(collection_endpoint(EntityKind::Industry), "/api/industries");
    assert_eq!(collection_endpoint(EntityKind::Project), "/api/projects");
    assert_eq!(collection_endpoint(EntityKind::Service), "/api/services");
}

#[test]
fn check_slug_endpoint_formats_query() {
    assert_eq!(
        check_slug_endpoint(EntityKind::Service, "cloud-migration"),
        "/api/services/check-slug?slug=cloud-migration"
    );
}

#[test]
fn media_endpoint_is_shared() {
    assert_eq!(MEDIA_ENDPOINT, "/api/media");
}

#[test]
fn failure_messages_format_status() {
    assert_eq!(slug_check_failed_message(503), "slug check failed: 503");
    assert_eq!(upload_failed_message(413), "upload failed: 413");
    assert_eq!(media_list_failed_message(401), "media list failed: 401");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_fail_instead_of_guessing() {
    let checked = futures::executor::block_on(check_slug_availability(EntityKind::Blog, "launch-notes"));
    assert!(checked.is_err());
    let listed = futures::executor::block_on(list_media());
    assert!(listed.is_err());
}
