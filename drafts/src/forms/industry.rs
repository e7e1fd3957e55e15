//! New industry form.

use serde::{Deserialize, Serialize};

use super::blog::non_blank;
use super::lenient;
use super::payload::SnakeKeys;
use super::sections::{ContentSection, StatsSection};
use super::{DraftForm, any_text};
use crate::entity::EntityKind;
use crate::validate::ValidationErrors;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndustryForm {
    #[serde(deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub meta_title: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub meta_description: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub is_published: bool,
    #[serde(deserialize_with = "lenient::ids")]
    pub selected_tags: Vec<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub projects_count: u32,
    #[serde(deserialize_with = "lenient::or_default")]
    pub reviews_count: u32,
    #[serde(deserialize_with = "lenient::or_default")]
    pub industries_count: u32,
    #[serde(deserialize_with = "lenient::or_default")]
    pub projects_stats_section: StatsSection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub challenge_section: ContentSection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub expertise_section: ContentSection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub what_sets_us_apart_section: ContentSection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub we_build_section: ContentSection,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateIndustry {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_published: bool,
    pub tag_ids: Vec<String>,
    pub projects_count: u32,
    pub reviews_count: u32,
    pub industries_count: u32,
    pub projects_stats_section: SnakeKeys<StatsSection>,
    pub challenge_section: SnakeKeys<ContentSection>,
    pub expertise_section: SnakeKeys<ContentSection>,
    pub what_sets_us_apart_section: SnakeKeys<ContentSection>,
    pub we_build_section: SnakeKeys<ContentSection>,
}

impl IndustryForm {
    fn sections(&self) -> [(&'static str, &ContentSection); 4] {
        [
            ("challengeSection", &self.challenge_section),
            ("expertiseSection", &self.expertise_section),
            ("whatSetsUsApartSection", &self.what_sets_us_apart_section),
            ("weBuildSection", &self.we_build_section),
        ]
    }
}

impl DraftForm for IndustryForm {
    const KIND: EntityKind = EntityKind::Industry;
    type Payload = CreateIndustry;

    fn has_content(&self) -> bool {
        any_text(&[
            &self.title,
            &self.description,
            &self.slug,
            &self.meta_title,
            &self.meta_description,
        ]) || !self.selected_tags.is_empty()
            || self.projects_count > 0
            || self.reviews_count > 0
            || self.industries_count > 0
            || self.projects_stats_section.has_content()
            || self.sections().iter().any(|(_, s)| s.has_content())
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
        errors.required("description", "Description", &self.description);
        errors.slug("slug", &self.slug);
        errors.meta(&self.meta_title, &self.meta_description);
        for (name, section) in self.sections() {
            for (i, item) in section.items.iter().enumerate() {
                errors.required(&format!("{name}.items[{i}].title"), "Item title", &item.title);
            }
        }
        for (i, stat) in self.projects_stats_section.stats.iter().enumerate() {
            errors.required(&format!("projectsStatsSection.stats[{i}].label"), "Stat label", &stat.label);
        }
        errors.into_result()
    }

    fn to_payload(&self) -> CreateIndustry {
        CreateIndustry {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            slug: self.slug.trim().to_owned(),
            meta_title: non_blank(&self.meta_title),
            meta_description: non_blank(&self.meta_description),
            is_published: self.is_published,
            tag_ids: self.selected_tags.clone(),
            projects_count: self.projects_count,
            reviews_count: self.reviews_count,
            industries_count: self.industries_count,
            projects_stats_section: SnakeKeys(self.projects_stats_section.clone()),
            challenge_section: SnakeKeys(self.challenge_section.clone()),
            expertise_section: SnakeKeys(self.expertise_section.clone()),
            what_sets_us_apart_section: SnakeKeys(self.what_sets_us_apart_section.clone()),
            we_build_section: SnakeKeys(self.we_build_section.clone()),
        }
    }
}
