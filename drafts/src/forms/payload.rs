//! Backend naming for nested form data.
//!
//! Form structs keep the camelCase field names of stored drafts. Create
//! payloads are snake_case throughout, so nested section data is sent through
//! [`SnakeKeys`], which renames every object key on the way out.

use serde::{Serialize, Serializer, ser::Error as _};
use serde_json::{Map, Value};

/// Serializes `T` with every object key, at any depth, in snake_case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnakeKeys<T>(pub T);

impl<T> SnakeKeys<T> {
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize> Serialize for SnakeKeys<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = serde_json::to_value(&self.0).map_err(S::Error::custom)?;
        snake_keys(value).serialize(serializer)
    }
}

fn snake_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (to_snake_case(&k), snake_keys(v)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(snake_keys).collect()),
        other => other,
    }
}

/// `subSections` -> `sub_sections`; already snake_case input is unchanged.
#[must_use]
pub fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
