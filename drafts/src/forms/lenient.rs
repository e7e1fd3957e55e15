//! Field-level decoding for stored drafts.
//!
//! Snapshots outlive the form code that wrote them and are sometimes written
//! by other clients. A `null` or mistyped field falls back to its type
//! default so the rest of the draft still restores. Ids accept both the
//! string and the numeric form the backend hands out.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode one field, using `T::default()` for `null` or a mistyped value.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "draft field has an unexpected type; using default");
        T::default()
    }))
}

/// Optional id stored as a string or a number.
pub(crate) fn id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(id_text(Value::deserialize(deserializer)?))
}

/// Required id stored as a string or a number; empty when unusable.
pub(crate) fn id_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(id_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// List of ids; non-id entries are dropped and a non-list decodes empty.
pub(crate) fn ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().filter_map(id_text).collect()),
        Value::Null => Ok(Vec::new()),
        other => {
            tracing::warn!(value = %other, "draft id list is not a list; using empty");
            Ok(Vec::new())
        }
    }
}

fn id_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => None,
        other => {
            tracing::warn!(value = %other, "draft id has an unexpected type; dropping it");
            None
        }
    }
}
