//! Nested section data shared by the entity forms.

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::validate::ValidationErrors;

/// Image chosen through upload or the media gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaRef {
    #[serde(deserialize_with = "lenient::id_or_empty")]
    pub id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub url: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub alt_text: String,
}

impl MediaRef {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.url.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSection {
    #[serde(deserialize_with = "lenient::or_default")]
    pub heading: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub subheading: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub image: Option<MediaRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubSection {
    #[serde(deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub image: Option<MediaRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub role: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub bio: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub photo: Option<MediaRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(deserialize_with = "lenient::or_default")]
    pub quote: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub author: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub role: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub company: String,
    /// 1..=5 once filled in; 0 means unrated.
    #[serde(deserialize_with = "lenient::or_default")]
    pub rating: u8,
}

/// Hero, sub-sections, team, and testimonials for project and service pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionsData {
    #[serde(deserialize_with = "lenient::or_default")]
    pub hero: HeroSection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub sub_sections: Vec<SubSection>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub team_members: Vec<TeamMember>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub testimonials: Vec<Testimonial>,
}

impl SectionsData {
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.hero.heading.trim().is_empty()
            || !self.hero.subheading.trim().is_empty()
            || self.hero.image.is_some()
            || !self.sub_sections.is_empty()
            || !self.team_members.is_empty()
            || !self.testimonials.is_empty()
    }

    /// Rating and completeness rules shared by project and service forms.
    pub(crate) fn check(&self, errors: &mut ValidationErrors) {
        for (i, t) in self.testimonials.iter().enumerate() {
            if t.quote.trim().is_empty() {
                errors.push(format!("sectionsData.testimonials[{i}].quote"), "Quote is required");
            }
            if !(1..=5).contains(&t.rating) {
                errors.push(
                    format!("sectionsData.testimonials[{i}].rating"),
                    "Rating must be between 1 and 5",
                );
            }
        }
        for (i, m) in self.team_members.iter().enumerate() {
            if m.name.trim().is_empty() {
                errors.push(format!("sectionsData.teamMembers[{i}].name"), "Name is required");
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stat {
    #[serde(deserialize_with = "lenient::or_default")]
    pub label: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionItem {
    #[serde(deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub icon: String,
}

/// Heading block with a list of items (challenge, expertise, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentSection {
    #[serde(deserialize_with = "lenient::or_default")]
    pub heading: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub image: Option<MediaRef>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub items: Vec<SectionItem>,
}

impl ContentSection {
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.heading.trim().is_empty()
            || !self.description.trim().is_empty()
            || self.image.is_some()
            || !self.items.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsSection {
    #[serde(deserialize_with = "lenient::or_default")]
    pub heading: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub stats: Vec<Stat>,
}

impl StatsSection {
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.heading.trim().is_empty() || !self.description.trim().is_empty() || !self.stats.is_empty()
    }
}
