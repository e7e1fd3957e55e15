//! Drafted field sets for each "new entity" form.
//!
//! DESIGN
//! ======
//! Every form struct is `#[serde(default, rename_all = "camelCase")]`, so a
//! stored snapshot from an older field set loads field by field with type
//! defaults for anything it lacks. The create payloads sent to the backend
//! are separate snake_case types built by [`DraftForm::to_payload`]; nested
//! section data in them goes through [`SnakeKeys`].
//!
//! ERROR HANDLING
//! ==============
//! Field decoding is lenient: a `null` or mistyped field takes its default
//! and ids accept strings or numbers, so one bad field never loses a draft.

pub mod blog;
pub mod industry;
mod lenient;
pub mod payload;
pub mod project;
pub mod sections;
pub mod service;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub use blog::BlogForm;
pub use industry::IndustryForm;
pub use payload::SnakeKeys;
pub use project::ProjectForm;
pub use sections::{
    ContentSection, HeroSection, MediaRef, SectionItem, SectionsData, Stat, StatsSection, SubSection, TeamMember,
    Testimonial,
};
pub use service::ServiceForm;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::entity::EntityKind;
use crate::validate::ValidationErrors;

/// A form whose working state is kept as a local draft.
pub trait DraftForm: Serialize + DeserializeOwned + Default + Clone {
    /// Entity kind; fixes the storage key and autosave policy.
    const KIND: EntityKind;

    /// Backend create payload.
    type Payload: Serialize;

    /// True when at least one tracked field holds user input.
    fn has_content(&self) -> bool;

    /// Current slug value.
    fn slug(&self) -> &str;

    /// Text the slug derives from (title or name).
    fn slug_source(&self) -> &str;

    fn set_slug(&mut self, slug: String);

    /// Check the form against the entity's submission rules.
    ///
    /// # Errors
    ///
    /// Returns every failed field rule, in form order.
    fn validate(&self) -> Result<(), ValidationErrors>;

    fn to_payload(&self) -> Self::Payload;
}

/// True if any of the text fields is non-blank.
pub(crate) fn any_text(fields: &[&str]) -> bool {
    fields.iter().any(|f| !f.trim().is_empty())
}
