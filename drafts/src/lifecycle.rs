//! Per-form draft lifecycle.
//!
//! ```text
//! NoDraft --Mounted{found}--> Pending --Restored--> Active
//!                               |  \--Declined--> NoDraft
//! NoDraft|Active|Cleared --Saved--> Active
//! Pending|Active --Cleared|Submitted--> Cleared
//! ```
//!
//! Events that do not apply to the current phase leave it unchanged. A
//! remount starts again from `NoDraft`.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// Where a mounted form stands relative to its stored draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftPhase {
    /// Nothing stored, or the user chose to start fresh.
    #[default]
    NoDraft,
    /// A stored snapshot was found and the recovery prompt is unanswered.
    Pending,
    /// The form is backed by a stored snapshot (restored or freshly saved).
    Active,
    /// The draft was removed by an explicit clear or a successful submit.
    Cleared,
}

/// Inputs that move a form between phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftEvent {
    Mounted { found: bool },
    Restored,
    Declined,
    Saved,
    Cleared,
    Submitted,
}

impl DraftPhase {
    #[must_use]
    pub fn apply(self, event: DraftEvent) -> Self {
        match (self, event) {
            (Self::NoDraft, DraftEvent::Mounted { found: true }) => Self::Pending,
            (Self::Pending, DraftEvent::Restored) => Self::Active,
            (Self::Pending, DraftEvent::Declined) => Self::NoDraft,
            (Self::NoDraft | Self::Active | Self::Cleared, DraftEvent::Saved) => Self::Active,
            (Self::Pending | Self::Active, DraftEvent::Cleared | DraftEvent::Submitted) => Self::Cleared,
            (phase, _) => phase,
        }
    }

    /// True while a stored snapshot backs (or may back) the form.
    #[must_use]
    pub fn has_draft(self) -> bool {
        matches!(self, Self::Pending | Self::Active)
    }

    /// True while the recovery prompt should be shown.
    #[must_use]
    pub fn awaiting_choice(self) -> bool {
        self == Self::Pending
    }
}
