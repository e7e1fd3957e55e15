//! New service form.

use serde::{Deserialize, Serialize};

use super::blog::non_blank;
use super::lenient;
use super::payload::SnakeKeys;
use super::sections::SectionsData;
use super::{DraftForm, any_text};
use crate::entity::EntityKind;
use crate::validate::ValidationErrors;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceForm {
    #[serde(deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub meta_title: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub meta_description: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub published: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub sections_data: SectionsData,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateService {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub published: bool,
    pub sections: SnakeKeys<SectionsData>,
}

impl DraftForm for ServiceForm {
    const KIND: EntityKind = EntityKind::Service;
    type Payload = CreateService;

    fn has_content(&self) -> bool {
        any_text(&[
            &self.title,
            &self.slug,
            &self.description,
            &self.meta_title,
            &self.meta_description,
        ]) || self.sections_data.has_content()
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
        errors.slug("slug", &self.slug);
        errors.required("description", "Description", &self.description);
        errors.meta(&self.meta_title, &self.meta_description);
        self.sections_data.check(&mut errors);
        errors.into_result()
    }

    fn to_payload(&self) -> CreateService {
        CreateService {
            title: self.title.trim().to_owned(),
            slug: self.slug.trim().to_owned(),
            description: self.description.trim().to_owned(),
            meta_title: non_blank(&self.meta_title),
            meta_description: non_blank(&self.meta_description),
            published: self.published,
            sections: SnakeKeys(self.sections_data.clone()),
        }
    }
}
