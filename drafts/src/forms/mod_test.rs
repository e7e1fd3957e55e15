use super::*;
use crate::snapshot::DraftSnapshot;

fn valid_blog() -> BlogForm {
    BlogForm {
        title: "My First Post".to_owned(),
        slug: "my-first-post".to_owned(),
        excerpt: "My First Post testing draft".to_owned(),
        content: "<p>Hello there</p>".to_owned(),
        ..BlogForm::default()
    }
}

// =============================================================
// has_content
// =============================================================

#[test]
fn default_forms_have_no_content() {
    assert!(!BlogForm::default().has_content());
    assert!(!IndustryForm::default().has_content());
    assert!(!ProjectForm::default().has_content());
    assert!(!ServiceForm::default().has_content());
}

#[test]
fn whitespace_only_text_is_not_content() {
    let form = BlogForm {
        title: "   ".to_owned(),
        ..BlogForm::default()
    };
    assert!(!form.has_content());
}

#[test]
fn non_text_fields_count_as_content() {
    let blog = BlogForm {
        selected_tag_ids: vec!["t1".to_owned()],
        ..BlogForm::default()
    };
    assert!(blog.has_content());

    let industry = IndustryForm {
        reviews_count: 3,
        ..IndustryForm::default()
    };
    assert!(industry.has_content());

    let mut project = ProjectForm::default();
    project.sections_data.testimonials.push(Testimonial::default());
    assert!(project.has_content());

    let mut service = ServiceForm::default();
    service.sections_data.hero.heading = "Hero".to_owned();
    assert!(service.has_content());
}

#[test]
fn industry_nested_section_counts_as_content() {
    let mut form = IndustryForm::default();
    form.we_build_section.items.push(SectionItem::default());
    assert!(form.has_content());
}

// =============================================================
// validate
// =============================================================

#[test]
fn valid_blog_passes() {
    assert_eq!(valid_blog().validate(), Ok(()));
}

#[test]
fn blog_excerpt_needs_twenty_characters() {
    let form = BlogForm {
        excerpt: "My First Post".to_owned(),
        ..valid_blog()
    };
    let errors = form.validate().expect_err("excerpt too short");
    assert_eq!(
        errors.message_for("excerpt"),
        Some("Excerpt must be at least 20 characters")
    );
}

#[test]
fn blog_empty_editor_markup_is_missing_content() {
    let form = BlogForm {
        content: "<p></p>".to_owned(),
        ..valid_blog()
    };
    let errors = form.validate().expect_err("content empty");
    assert_eq!(errors.message_for("content"), Some("Content is required"));
}

#[test]
fn blog_featured_image_requires_alt_text() {
    let form = BlogForm {
        featured_image_id: Some("img-1".to_owned()),
        ..valid_blog()
    };
    let errors = form.validate().expect_err("alt text missing");
    assert!(errors.message_for("featuredImageAltText").is_some());
}

#[test]
fn industry_requires_title_description_and_item_titles() {
    let mut form = IndustryForm {
        slug: "manufacturing".to_owned(),
        ..IndustryForm::default()
    };
    form.challenge_section.items.push(SectionItem::default());
    let errors = form.validate().expect_err("missing fields");
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["title", "description", "challengeSection.items[0].title"]);
}

#[test]
fn project_rejects_out_of_range_rating() {
    let mut form = ProjectForm {
        name: "Warehouse Robotics".to_owned(),
        slug: "warehouse-robotics".to_owned(),
        description: "Automated picking".to_owned(),
        ..ProjectForm::default()
    };
    form.sections_data.testimonials.push(Testimonial {
        quote: "Great".to_owned(),
        rating: 6,
        ..Testimonial::default()
    });
    let errors = form.validate().expect_err("bad rating");
    assert_eq!(
        errors.message_for("sectionsData.testimonials[0].rating"),
        Some("Rating must be between 1 and 5")
    );
}

#[test]
fn service_checks_meta_limits() {
    let form = ServiceForm {
        title: "Consulting".to_owned(),
        slug: "consulting".to_owned(),
        description: "Advice".to_owned(),
        meta_title: "x".repeat(61),
        ..ServiceForm::default()
    };
    let errors = form.validate().expect_err("meta title too long");
    assert_eq!(errors.len(), 1);
    assert!(errors.message_for("metaTitle").is_some());
}

// =============================================================
// payloads
// =============================================================

#[test]
fn blog_payload_trims_and_omits_blank_optionals() {
    let form = BlogForm {
        title: "  Spaced  ".to_owned(),
        meta_title: "   ".to_owned(),
        featured_image_alt_text: "ignored without image".to_owned(),
        ..valid_blog()
    };
    let payload = form.to_payload();
    assert_eq!(payload.title, "Spaced");
    assert_eq!(payload.meta_title, None);
    assert_eq!(payload.featured_image_alt_text, None);
}

#[test]
fn payload_uses_backend_field_names() {
    let payload = serde_json::to_value(valid_blog().to_payload()).expect("json");
    assert!(payload.get("tag_ids").is_some());
    assert!(payload.get("selectedTagIds").is_none());
}

#[test]
fn nested_section_payload_keys_are_snake_case() {
    let form = ProjectForm {
        sections_data: SectionsData {
            sub_sections: vec![SubSection {
                title: "Scope".to_owned(),
                image: Some(MediaRef {
                    id: "7".to_owned(),
                    url: "/m/7.png".to_owned(),
                    alt_text: "Crane".to_owned(),
                }),
                ..SubSection::default()
            }],
            ..SectionsData::default()
        },
        ..ProjectForm::default()
    };
    let payload = serde_json::to_value(form.to_payload()).expect("json");
    let sections = &payload["sections"];
    assert!(sections.get("sub_sections").is_some());
    assert!(sections.get("team_members").is_some());
    assert!(sections.get("subSections").is_none());
    assert_eq!(sections["sub_sections"][0]["image"]["alt_text"], "Crane");

    let industry = serde_json::to_value(IndustryForm::default().to_payload()).expect("json");
    assert!(industry.get("what_sets_us_apart_section").is_some());
    assert!(industry["projects_stats_section"].get("heading").is_some());
}

#[test]
fn snake_case_conversion() {
    assert_eq!(payload::to_snake_case("subSections"), "sub_sections");
    assert_eq!(payload::to_snake_case("altText"), "alt_text");
    assert_eq!(payload::to_snake_case("tag_ids"), "tag_ids");
}

// =============================================================
// snapshot shape
// =============================================================

#[test]
fn industry_snapshot_uses_persisted_field_names() {
    let form = IndustryForm {
        title: "Healthcare".to_owned(),
        is_published: true,
        projects_count: 12,
        ..IndustryForm::default()
    };
    let value = serde_json::to_value(&form).expect("json");
    for key in [
        "title",
        "isPublished",
        "selectedTags",
        "projectsCount",
        "reviewsCount",
        "industriesCount",
        "projectsStatsSection",
        "challengeSection",
        "expertiseSection",
        "whatSetsUsApartSection",
        "weBuildSection",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn older_project_snapshot_without_sections_loads_with_defaults() {
    let raw = r#"{"name":"Legacy","slug":"legacy","timestamp":"2024-11-02T08:30:00Z"}"#;
    let snap: DraftSnapshot<ProjectForm> = DraftSnapshot::from_json(raw).expect("parse");
    assert_eq!(snap.data.name, "Legacy");
    assert!(snap.data.selected_tags.is_empty());
    assert_eq!(snap.data.sections_data, SectionsData::default());
}

#[test]
fn numeric_ids_in_snapshot_load_as_text() {
    let raw = r#"{"title":"Hello","featuredImageId":42,"selectedTagIds":[3,"web"],"timestamp":"2025-03-01T12:00:00Z"}"#;
    let snap: DraftSnapshot<BlogForm> = DraftSnapshot::from_json(raw).expect("parse");
    assert_eq!(snap.data.title, "Hello");
    assert_eq!(snap.data.featured_image_id.as_deref(), Some("42"));
    assert_eq!(snap.data.selected_tag_ids, ["3", "web"]);
}

#[test]
fn null_and_mistyped_fields_take_defaults() {
    let raw = r#"{"title":"Hello","content":null,"published":"yes","excerpt":"kept excerpt text"}"#;
    let snap: DraftSnapshot<BlogForm> = DraftSnapshot::from_json(raw).expect("parse");
    assert_eq!(snap.data.title, "Hello");
    assert_eq!(snap.data.content, "");
    assert!(!snap.data.published);
    assert_eq!(snap.data.excerpt, "kept excerpt text");
}

#[test]
fn bad_nested_field_keeps_rest_of_project() {
    let raw = r#"{"name":"Harbor","selectedTags":[1,2],"sectionsData":{"hero":{"heading":null,"image":{"id":9,"url":"/m/9.png"}},"testimonials":[{"quote":"Great","rating":"five"}],"teamMembers":null}}"#;
    let snap: DraftSnapshot<ProjectForm> = DraftSnapshot::from_json(raw).expect("parse");
    assert_eq!(snap.data.name, "Harbor");
    assert_eq!(snap.data.selected_tags, ["1", "2"]);
    let sections = &snap.data.sections_data;
    assert_eq!(sections.hero.heading, "");
    assert_eq!(sections.hero.image.as_ref().map(|m| m.id.as_str()), Some("9"));
    assert_eq!(sections.testimonials[0].quote, "Great");
    assert_eq!(sections.testimonials[0].rating, 0);
    assert!(sections.team_members.is_empty());
}

#[test]
fn slug_accessors_follow_source_field() {
    let mut project = ProjectForm {
        name: "Name".to_owned(),
        ..ProjectForm::default()
    };
    assert_eq!(project.slug_source(), "Name");
    project.set_slug("name".to_owned());
    assert_eq!(project.slug(), "name");
    assert_eq!(BlogForm::KIND, crate::EntityKind::Blog);
}
