//! New project form.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::payload::SnakeKeys;
use super::sections::SectionsData;
use super::{DraftForm, any_text};
use crate::entity::EntityKind;
use crate::validate::ValidationErrors;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectForm {
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient::ids")]
    pub selected_tags: Vec<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub sections_data: SectionsData,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateProject {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub tag_ids: Vec<String>,
    pub sections: SnakeKeys<SectionsData>,
}

impl DraftForm for ProjectForm {
    const KIND: EntityKind = EntityKind::Project;
    type Payload = CreateProject;

    fn has_content(&self) -> bool {
        any_text(&[&self.name, &self.slug, &self.description])
            || !self.selected_tags.is_empty()
            || self.sections_data.has_content()
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn slug_source(&self) -> &str {
        &self.name
    }

    fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.required("name", "Name", &self.name);
        errors.slug("slug", &self.slug);
        errors.required("description", "Description", &self.description);
        self.sections_data.check(&mut errors);
        errors.into_result()
    }

    fn to_payload(&self) -> CreateProject {
        CreateProject {
            name: self.name.trim().to_owned(),
            slug: self.slug.trim().to_owned(),
            description: self.description.trim().to_owned(),
            tag_ids: self.selected_tags.clone(),
            sections: SnakeKeys(self.sections_data.clone()),
        }
    }
}
