//! Field-level validation shared by the entity forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use serde::Serialize;

use crate::slug::validate_slug;

pub const META_TITLE_MAX: usize = 60;
pub const META_DESCRIPTION_MAX: usize = 160;

/// One failed rule, addressed by the form's camelCase field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every failed rule for a form, in the order the fields appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// First message recorded for `field`.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(())` when nothing failed.
    ///
    /// # Errors
    ///
    /// Returns `self` if any rule failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    pub fn required(&mut self, field: &str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{label} is required"));
        }
    }

    pub fn min_chars(&mut self, field: &str, label: &str, value: &str, min: usize) {
        let n = value.trim().chars().count();
        if n < min {
            self.push(field, format!("{label} must be at least {min} characters"));
        }
    }

    pub fn max_chars(&mut self, field: &str, label: &str, value: &str, max: usize) {
        if value.trim().chars().count() > max {
            self.push(field, format!("{label} must be at most {max} characters"));
        }
    }

    pub fn slug(&mut self, field: &str, value: &str) {
        if let Err(e) = validate_slug(value) {
            self.push(field, e.to_string());
        }
    }

    /// SEO limits common to blog, industry, and service forms.
    pub fn meta(&mut self, meta_title: &str, meta_description: &str) {
        self.max_chars("metaTitle", "Meta title", meta_title, META_TITLE_MAX);
        self.max_chars("metaDescription", "Meta description", meta_description, META_DESCRIPTION_MAX);
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
