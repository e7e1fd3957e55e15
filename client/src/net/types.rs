//! Response bodies returned by the CMS REST backend.
//!
//! DESIGN
//! ======
//! Backends in this family disagree on id types (numeric row ids vs. string
//! UUIDs), so ids are normalized to strings while decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use drafts::forms::MediaRef;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// `GET /api/{collection}/check-slug` body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugAvailability {
    pub available: bool,
}

/// Entity returned by a successful create call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEntity {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// One uploaded media file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default, alias = "filename")]
    pub file_name: Option<String>,
}

impl MediaAsset {
    /// Form-side reference to this asset, keeping `alt_text` the editor typed.
    pub fn to_media_ref(&self, alt_text: Option<&str>) -> MediaRef {
        MediaRef {
            id: self.id.clone(),
            url: self.url.clone(),
            alt_text: alt_text
                .map(str::to_owned)
                .or_else(|| self.alt_text.clone())
                .unwrap_or_default(),
        }
    }
}

/// `GET /api/media` body: either a bare list or `{ "items": [...] }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MediaList {
    Bare(Vec<MediaAsset>),
    Wrapped { items: Vec<MediaAsset> },
}

impl MediaList {
    pub fn into_items(self) -> Vec<MediaAsset> {
        match self {
            Self::Bare(items) | Self::Wrapped { items } => items,
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Ok(s),
        serde_json::Value::Number(n) if n.is_u64() || n.is_i64() => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
