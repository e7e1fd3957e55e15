//! Slug derivation, validation, and the debounced availability-check gate.
//!
//! DESIGN
//! ======
//! The gate does not perform I/O. Each keystroke goes through
//! [`SlugCheckGate::on_input`], which cancels whatever check was pending and
//! schedules a new one; the host polls for due requests and hands results
//! back with their sequence number so late answers for superseded input are
//! dropped.
//!
//! ERROR HANDLING
//! ==============
//! A failed request is [`SlugStatus::CheckFailed`], never "taken": the
//! backend being unreachable says nothing about whether the slug exists.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

use std::fmt::Display;

use time::{Duration, OffsetDateTime};

pub const SLUG_MIN_LEN: usize = 3;
pub const SLUG_MAX_LEN: usize = 100;
pub const SLUG_CHECK_DELAY: Duration = Duration::seconds(5);

/// Lowercase, hyphen-separated ASCII slug for `text`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if out.len() > SLUG_MAX_LEN {
        out.truncate(SLUG_MAX_LEN);
        while out.ends_with('-') {
            out.pop();
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("Slug must be at least {} characters", SLUG_MIN_LEN)]
    TooShort,
    #[error("Slug must be at most {} characters", SLUG_MAX_LEN)]
    TooLong,
    #[error("Slug may only contain lowercase letters, numbers, and single hyphens")]
    InvalidChars,
}

/// Check `slug` against the URL slug rules.
///
/// # Errors
///
/// Returns the first rule the slug breaks.
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    if slug.len() < SLUG_MIN_LEN {
        return Err(SlugError::TooShort);
    }
    if slug.len() > SLUG_MAX_LEN {
        return Err(SlugError::TooLong);
    }
    let well_formed = slug
        .split('-')
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    if !well_formed {
        return Err(SlugError::InvalidChars);
    }
    Ok(())
}

/// Whether the slug field still follows the title.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlugSource {
    #[default]
    Derived,
    Manual,
}

impl SlugSource {
    /// Source after the user typed `value` into the slug field. Clearing
    /// the field hands control back to the title.
    #[must_use]
    pub fn after_manual_edit(value: &str) -> Self {
        if value.trim().is_empty() { Self::Derived } else { Self::Manual }
    }

    /// New slug for a title edit, or `None` when the user owns the slug.
    #[must_use]
    pub fn derive(self, title: &str) -> Option<String> {
        match self {
            Self::Derived => Some(slugify(title)),
            Self::Manual => None,
        }
    }
}

/// Availability feedback shown beside the slug field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SlugStatus {
    #[default]
    Idle,
    TooShort,
    Invalid(String),
    Checking,
    Available,
    Taken,
    CheckFailed(String),
}

impl SlugStatus {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::TooShort => format!("Slug must be at least {SLUG_MIN_LEN} characters"),
            Self::Invalid(reason) => reason.clone(),
            Self::Checking => "Checking availability...".to_owned(),
            Self::Available => "Slug is available".to_owned(),
            Self::Taken => "This slug already exists".to_owned(),
            Self::CheckFailed(reason) => format!("Could not check slug availability: {reason}"),
        }
    }

    /// True unless the slug is known to be unusable.
    #[must_use]
    pub fn allows_submit(&self) -> bool {
        !matches!(self, Self::TooShort | Self::Invalid(_) | Self::Taken)
    }
}

/// What a keystroke did to the pending check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlugInput {
    Empty,
    TooShort,
    Invalid(SlugError),
    Scheduled { seq: u64, due_at: OffsetDateTime },
}

impl SlugInput {
    #[must_use]
    pub fn status(&self) -> SlugStatus {
        match self {
            Self::Empty => SlugStatus::Idle,
            Self::TooShort => SlugStatus::TooShort,
            Self::Invalid(e) => SlugStatus::Invalid(e.to_string()),
            Self::Scheduled { .. } => SlugStatus::Checking,
        }
    }
}

/// A check that is due and should be sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlugCheckRequest {
    pub seq: u64,
    pub slug: String,
}

#[derive(Clone, Debug)]
struct PendingCheck {
    seq: u64,
    slug: String,
    due_at: OffsetDateTime,
}

/// Debounce gate for slug availability checks.
#[derive(Clone, Debug)]
pub struct SlugCheckGate {
    delay: Duration,
    seq: u64,
    pending: Option<PendingCheck>,
}

impl Default for SlugCheckGate {
    fn default() -> Self {
        Self::new(SLUG_CHECK_DELAY)
    }
}

impl SlugCheckGate {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            seq: 0,
            pending: None,
        }
    }

    /// Record a new slug value. Always cancels the previous pending check.
    pub fn on_input(&mut self, slug: &str, now: OffsetDateTime) -> SlugInput {
        self.seq += 1;
        self.pending = None;
        let slug = slug.trim();
        if slug.is_empty() {
            return SlugInput::Empty;
        }
        match validate_slug(slug) {
            Err(SlugError::TooShort) => SlugInput::TooShort,
            Err(e) => SlugInput::Invalid(e),
            Ok(()) => {
                let due_at = now + self.delay;
                self.pending = Some(PendingCheck {
                    seq: self.seq,
                    slug: slug.to_owned(),
                    due_at,
                });
                SlugInput::Scheduled { seq: self.seq, due_at }
            }
        }
    }

    #[must_use]
    pub fn next_due(&self) -> Option<OffsetDateTime> {
        self.pending.as_ref().map(|p| p.due_at)
    }

    /// Take the pending check if it is due. Each check is returned once.
    pub fn poll(&mut self, now: OffsetDateTime) -> Option<SlugCheckRequest> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.due_at);
        if !due {
            return None;
        }
        self.pending.take().map(|p| SlugCheckRequest { seq: p.seq, slug: p.slug })
    }

    /// True if a result for `seq` still describes the current input.
    #[must_use]
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }

    /// Drop any pending check and invalidate in-flight results (unmount).
    pub fn cancel(&mut self) {
        self.seq += 1;
        self.pending = None;
    }

    /// Turn a backend answer into a status, or `None` if it is stale.
    pub fn resolve<E: Display>(&self, seq: u64, result: Result<bool, E>) -> Option<SlugStatus> {
        if !self.is_current(seq) {
            tracing::debug!(seq, current = self.seq, "dropping stale slug check result");
            return None;
        }
        Some(match result {
            Ok(true) => SlugStatus::Available,
            Ok(false) => SlugStatus::Taken,
            Err(e) => {
                tracing::warn!(error = %e, "slug availability check failed");
                SlugStatus::CheckFailed(e.to_string())
            }
        })
    }
}
