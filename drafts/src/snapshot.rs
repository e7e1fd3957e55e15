//! Stored draft payload.
//!
//! The wire shape is the form's own camelCase fields with a `timestamp`
//! sibling, e.g. `{"title": "...", "excerpt": "...", "timestamp": "2025-03-01T12:00:00Z"}`.
//! There is no version field: forms default any field missing from an older
//! snapshot, and unknown fields are ignored.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One complete serialized draft: form fields plus save time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftSnapshot<T> {
    #[serde(flatten)]
    pub data: T,
    /// When the snapshot was written. Absent in hand-edited or very old drafts.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
}

impl<T> DraftSnapshot<T> {
    #[must_use]
    pub fn new(data: T, timestamp: OffsetDateTime) -> Self {
        Self {
            data,
            timestamp: Some(timestamp),
        }
    }

    /// Snapshot age at `now`, if it carries a timestamp.
    #[must_use]
    pub fn age(&self, now: OffsetDateTime) -> Option<time::Duration> {
        self.timestamp.map(|ts| now - ts)
    }
}

impl<T: PartialEq> DraftSnapshot<T> {
    /// Equal field values, ignoring when each was saved.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Serialize> DraftSnapshot<T> {
    /// Serialize the whole snapshot to one JSON string.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if a field cannot be represented as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<T: serde::de::DeserializeOwned> DraftSnapshot<T> {
    /// Parse a stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns the parser error for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
