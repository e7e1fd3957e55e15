//! New blog post form.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::{DraftForm, any_text};
use crate::entity::EntityKind;
use crate::validate::ValidationErrors;

pub const TITLE_MAX: usize = 200;
pub const EXCERPT_MIN: usize = 20;
pub const EXCERPT_MAX: usize = 500;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogForm {
    #[serde(deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub excerpt: String,
    /// Rich-text editor HTML.
    #[serde(deserialize_with = "lenient::or_default")]
    pub content: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub meta_title: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub meta_description: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub published: bool,
    #[serde(deserialize_with = "lenient::ids")]
    pub selected_tag_ids: Vec<String>,
    #[serde(deserialize_with = "lenient::id")]
    pub featured_image_id: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub featured_image_alt_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub published: bool,
    pub tag_ids: Vec<String>,
    pub featured_image_id: Option<String>,
    pub featured_image_alt_text: Option<String>,
}

impl DraftForm for BlogForm {
    const KIND: EntityKind = EntityKind::Blog;
    type Payload = CreateBlogPost;

    fn has_content(&self) -> bool {
        any_text(&[
            &self.title,
            &self.slug,
            &self.excerpt,
            &self.content,
            &self.meta_title,
            &self.meta_description,
            &self.featured_image_alt_text,
        ]) || !self.selected_tag_ids.is_empty()
            || self.featured_image_id.is_some()
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn slug_source(&self) -> &str {
        &self.title
    }

    fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("title", "Title", &self.title);
        errors.max_chars("title", "Title", &self.title, TITLE_MAX);
        errors.slug("slug", &self.slug);
        errors.min_chars("excerpt", "Excerpt", &self.excerpt, EXCERPT_MIN);
        errors.max_chars("excerpt", "Excerpt", &self.excerpt, EXCERPT_MAX);
        errors.required("content", "Content", &strip_tags(&self.content));
        errors.meta(&self.meta_title, &self.meta_description);
        if self.featured_image_id.is_some() {
            errors.required("featuredImageAltText", "Featured image alt text", &self.featured_image_alt_text);
        }
        errors.into_result()
    }

    fn to_payload(&self) -> CreateBlogPost {
        CreateBlogPost {
            title: self.title.trim().to_owned(),
            slug: self.slug.trim().to_owned(),
            excerpt: self.excerpt.trim().to_owned(),
            content: self.content.clone(),
            meta_title: non_blank(&self.meta_title),
            meta_description: non_blank(&self.meta_description),
            published: self.published,
            tag_ids: self.selected_tag_ids.clone(),
            featured_image_id: self.featured_image_id.clone(),
            featured_image_alt_text: self
                .featured_image_id
                .as_ref()
                .and_then(|_| non_blank(&self.featured_image_alt_text)),
        }
    }
}

/// The editor emits `<p></p>` for an empty document; count only visible text.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
}

pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
