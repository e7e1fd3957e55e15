//! Per-form draft controller.
//!
//! DESIGN
//! ======
//! A `DraftSession` is what one mounted form talks to. It combines the
//! typed [`DraftStore`], the [`Autosaver`] timing policy, the auto-save
//! toggle, and the [`DraftPhase`] that drives the recovery prompt.
//!
//! ERROR HANDLING
//! ==============
//! Saving is best-effort: a failed write is logged and reported as "not
//! saved", and the next tick simply tries again with a full overwrite.
//! Restore failures are returned so the form can show a toast; the live
//! form is left untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt::Display;

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::autosave::{AutosavePolicy, Autosaver};
use crate::error::DraftError;
use crate::forms::DraftForm;
use crate::lifecycle::{DraftEvent, DraftPhase};
use crate::storage::DraftStorage;
use crate::store::{DraftStatus, DraftStore};

/// What asked for a save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveTrigger {
    /// The autosave timer.
    Timer,
    /// The page is unloading.
    Unload,
    /// The user pressed "Save Now".
    Manual,
}

pub struct DraftSession<T, S> {
    store: DraftStore<T, S>,
    autosaver: Autosaver,
    phase: DraftPhase,
}

impl<T: DraftForm, S: DraftStorage> DraftSession<T, S> {
    /// Session with the form kind's default autosave policy.
    pub fn new(storage: S, now: OffsetDateTime) -> Self {
        Self::with_policy(storage, T::KIND.autosave_policy(), now)
    }

    pub fn with_policy(storage: S, policy: AutosavePolicy, now: OffsetDateTime) -> Self {
        Self {
            store: DraftStore::new(storage),
            autosaver: Autosaver::new(policy, now),
            phase: DraftPhase::NoDraft,
        }
    }

    /// Start (or restart) the cycle for a freshly mounted form.
    pub fn mount(&mut self, now: OffsetDateTime) -> DraftPhase {
        let found = self.store.exists();
        self.phase = DraftPhase::NoDraft.apply(DraftEvent::Mounted { found });
        self.autosaver.reset(now);
        debug!(key = %self.store.key(), found, "draft session mounted");
        self.phase
    }

    #[must_use]
    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    #[must_use]
    pub fn status(&self) -> DraftStatus {
        self.store.status()
    }

    #[must_use]
    pub fn store(&self) -> &DraftStore<T, S> {
        &self.store
    }

    /// Timestamp of the stored snapshot, for the recovery prompt.
    #[must_use]
    pub fn stored_at(&self) -> Option<OffsetDateTime> {
        match self.store.peek() {
            Ok(snapshot) => snapshot.and_then(|s| s.timestamp),
            Err(e) => {
                warn!(key = %self.store.key(), error = %e, "cannot read stored draft timestamp");
                None
            }
        }
    }

    #[must_use]
    pub fn auto_save_enabled(&self) -> bool {
        self.autosaver.is_enabled()
    }

    pub fn set_auto_save(&mut self, enabled: bool) {
        self.autosaver.set_enabled(enabled);
    }

    #[must_use]
    pub fn policy(&self) -> AutosavePolicy {
        self.autosaver.policy()
    }

    /// Record a field edit.
    pub fn note_change(&mut self, now: OffsetDateTime) {
        self.autosaver.note_change(now);
    }

    /// Earliest time [`DraftSession::tick`] could save.
    #[must_use]
    pub fn next_due(&self) -> Option<OffsetDateTime> {
        self.autosaver.next_due()
    }

    /// Timer callback. Saves when the policy says a save is due.
    pub fn tick(&mut self, form: &T, now: OffsetDateTime) -> bool {
        if !self.autosaver.is_due(now) {
            return false;
        }
        self.save_with(SaveTrigger::Timer, form, now)
    }

    /// Explicit "Save Now". Ignores the auto-save toggle.
    pub fn save_now(&mut self, form: &T, now: OffsetDateTime) -> bool {
        self.save_with(SaveTrigger::Manual, form, now)
    }

    /// Page-unload hook. Flushes unsaved edits when auto-save is on.
    pub fn on_unload(&mut self, form: &T, now: OffsetDateTime) -> bool {
        self.save_with(SaveTrigger::Unload, form, now)
    }

    fn should_save(&self, trigger: SaveTrigger, form: &T) -> bool {
        if self.phase.awaiting_choice() || !form.has_content() {
            return false;
        }
        match trigger {
            SaveTrigger::Timer => self.autosaver.is_enabled(),
            SaveTrigger::Unload => self.autosaver.is_enabled() && self.autosaver.is_dirty(),
            SaveTrigger::Manual => true,
        }
    }

    fn save_with(&mut self, trigger: SaveTrigger, form: &T, now: OffsetDateTime) -> bool {
        if !self.should_save(trigger, form) {
            return false;
        }
        match self.store.save(form, now) {
            Ok(_) => {
                self.autosaver.mark_saved(now);
                self.phase = self.phase.apply(DraftEvent::Saved);
                true
            }
            Err(e) => {
                warn!(key = %self.store.key(), ?trigger, error = %e, "draft save failed; will retry on next tick");
                false
            }
        }
    }

    /// User accepted the recovery prompt: copy the stored draft into `form`.
    ///
    /// Returns `Ok(false)` when the draft disappeared in the meantime.
    ///
    /// # Errors
    ///
    /// Returns the load error; `form` is not modified.
    pub fn restore(&mut self, form: &mut T, now: OffsetDateTime) -> Result<bool, DraftError> {
        match self.store.load() {
            Ok(Some(snapshot)) => {
                *form = snapshot.data;
                self.phase = self.phase.apply(DraftEvent::Restored);
                self.autosaver.reset(now);
                info!(key = %self.store.key(), "draft restored");
                Ok(true)
            }
            Ok(None) => {
                self.phase = self.phase.apply(DraftEvent::Declined);
                Ok(false)
            }
            Err(e) => {
                warn!(key = %self.store.key(), error = %e, "draft restore failed");
                Err(e)
            }
        }
    }

    /// User chose "start fresh". The stored snapshot stays until overwritten.
    pub fn discard(&mut self) {
        self.phase = self.phase.apply(DraftEvent::Declined);
    }

    /// Explicit "Clear Draft".
    pub fn clear(&mut self, now: OffsetDateTime) -> bool {
        match self.store.clear() {
            Ok(()) => {
                self.phase = self.phase.apply(DraftEvent::Cleared);
                self.autosaver.reset(now);
                true
            }
            Err(e) => {
                warn!(key = %self.store.key(), error = %e, "draft clear failed");
                false
            }
        }
    }

    /// Apply the outcome of the create call: clear on success, keep on failure.
    pub fn finish_submit<R, E: Display>(&mut self, result: &Result<R, E>, now: OffsetDateTime) {
        match result {
            Ok(_) => {
                self.autosaver.reset(now);
                match self.store.clear() {
                    Ok(()) => self.phase = self.phase.apply(DraftEvent::Submitted),
                    Err(e) => warn!(key = %self.store.key(), error = %e, "draft clear after submit failed"),
                }
            }
            Err(e) => {
                debug!(key = %self.store.key(), error = %e, "submit failed; keeping draft");
            }
        }
    }
}
