//! Entity kinds that own a "new entity" form and therefore a draft slot.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::autosave::AutosavePolicy;

/// Content type managed by the admin dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Blog,
    Industry,
    Project,
    Service,
}

impl EntityKind {
    pub const ALL: [Self; 4] = [Self::Blog, Self::Industry, Self::Project, Self::Service];

    /// Fixed storage key holding this kind's single draft snapshot.
    /// Existing browser drafts are stored under these exact names.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Blog => "blog_draft_data",
            Self::Industry => "industryDraft",
            Self::Project => "project_draft_data",
            Self::Service => "service_draft_data",
        }
    }

    /// REST collection segment, as in `/api/{collection}`.
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            Self::Blog => "blogs",
            Self::Industry => "industries",
            Self::Project => "projects",
            Self::Service => "services",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Blog => "blog post",
            Self::Industry => "industry",
            Self::Project => "project",
            Self::Service => "service",
        }
    }

    /// Default autosave timing for this kind's form.
    #[must_use]
    pub fn autosave_policy(self) -> AutosavePolicy {
        match self {
            Self::Industry => AutosavePolicy::Debounce(time::Duration::seconds(2)),
            Self::Blog | Self::Project | Self::Service => AutosavePolicy::Interval(time::Duration::seconds(30)),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Industry => "industry",
            Self::Project => "project",
            Self::Service => "service",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown entity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind `{0}` (expected blog, industry, project, or service)")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blog" | "blogs" | "post" => Ok(Self::Blog),
            "industry" | "industries" => Ok(Self::Industry),
            "project" | "projects" => Ok(Self::Project),
            "service" | "services" => Ok(Self::Service),
            _ => Err(UnknownEntityKind(s.to_owned())),
        }
    }
}
