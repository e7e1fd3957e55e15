//! Reactive draft session hook for "new entity" form pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! A form page calls [`use_draft`] once. It gets the live form signal, the
//! draft chrome state, and methods for every draft action (restore, start
//! fresh, save now, clear, toggle, submit). Under `hydrate` a poll loop
//! drives `DraftSession::tick` and a `beforeunload` listener flushes edits
//! that were not saved yet.
//!
//! DESIGN
//! ======
//! The session lives in a `StoredValue` outside the reactive graph; every
//! session call is followed by a `DraftUiState::sync`. Field edits go
//! through [`DraftHandle::edit`] so the autosave change clock is always fed.
//!
//! TRADE-OFFS
//! ==========
//! The loop polls once a second instead of arming one timer per policy.
//! Saves therefore land up to a second late, which is invisible next to a
//! 30 s interval and keeps both policies on one code path.

#[cfg(test)]
#[path = "draft_autosave_test.rs"]
mod draft_autosave_test;

use std::fmt::Display;
use std::future::Future;

use drafts::submit::prepare;
use drafts::{AutosavePolicy, DraftForm, DraftSession, SubmitError};
use leptos::prelude::*;
use time::OffsetDateTime;

use crate::state::draft::{DraftUiState, Notice};
use crate::util::browser_storage::BrowserStorage;

/// How often the autosave loop asks the session whether a save is due.
pub const AUTOSAVE_POLL: std::time::Duration = std::time::Duration::from_secs(1);

type Session<T> = DraftSession<T, BrowserStorage>;

/// Reactive handle to one form's draft session.
pub struct DraftHandle<T: DraftForm + Send + Sync + 'static> {
    pub form: RwSignal<T>,
    pub ui: RwSignal<DraftUiState>,
    session: StoredValue<Session<T>>,
}

impl<T: DraftForm + Send + Sync + 'static> Clone for DraftHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: DraftForm + Send + Sync + 'static> Copy for DraftHandle<T> {}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Mount a draft session for `T` and start its autosave loop.
pub fn use_draft<T: DraftForm + Send + Sync + 'static>() -> DraftHandle<T> {
    use_draft_with_policy(T::KIND.autosave_policy())
}

/// [`use_draft`] with an explicit autosave policy.
pub fn use_draft_with_policy<T: DraftForm + Send + Sync + 'static>(policy: AutosavePolicy) -> DraftHandle<T> {
    let mounted_at = now();
    let mut session = Session::<T>::with_policy(BrowserStorage, policy, mounted_at);
    session.mount(mounted_at);
    let mut ui = DraftUiState::default();
    ui.sync(&session);

    let handle = DraftHandle {
        form: RwSignal::new(T::default()),
        ui: RwSignal::new(ui),
        session: StoredValue::new(session),
    };

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(AUTOSAVE_POLL).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                handle.tick();
            }
        });
        let unload = window_event_listener(leptos::ev::beforeunload, move |_| handle.flush_on_unload());
        on_cleanup(move || {
            alive.store(false, std::sync::atomic::Ordering::Relaxed);
            unload.remove();
        });
    }

    handle
}

impl<T: DraftForm + Send + Sync + 'static> DraftHandle<T> {
    /// Apply a field edit and record it for autosave.
    pub fn edit(&self, apply: impl FnOnce(&mut T)) {
        self.form.update(apply);
        self.session.update_value(|s| s.note_change(now()));
    }

    /// Autosave timer step. Returns whether a write happened.
    pub fn tick(&self) -> bool {
        let Some(form) = self.form.try_get_untracked() else {
            return false;
        };
        let saved = self.session.try_update_value(|s| s.tick(&form, now())).unwrap_or(false);
        if saved {
            self.sync();
        }
        saved
    }

    /// `beforeunload`: flush edits the timer has not written yet.
    pub fn flush_on_unload(&self) {
        let Some(form) = self.form.try_get_untracked() else {
            return;
        };
        self.session.try_update_value(|s| s.on_unload(&form, now()));
    }

    /// "Restore": copy the stored draft into the live form.
    pub fn restore(&self) {
        let mut form = self.form.get_untracked();
        let outcome = self.session.try_update_value(|s| s.restore(&mut form, now()));
        let notice = match outcome {
            Some(Ok(true)) => {
                self.form.set(form);
                Notice::info("Draft restored")
            }
            Some(Ok(false)) => Notice::info("The saved draft is no longer available"),
            Some(Err(e)) => Notice::error(format!("Could not restore draft: {e}")),
            None => return,
        };
        self.sync();
        self.ui.update(|ui| ui.notify(notice));
    }

    /// "Start fresh": close the prompt and keep the blank form.
    pub fn discard(&self) {
        self.session.update_value(Session::<T>::discard);
        self.sync();
    }

    /// "Save Now", regardless of the auto-save toggle.
    pub fn save_now(&self) {
        let form = self.form.get_untracked();
        let saved = self.session.try_update_value(|s| s.save_now(&form, now())).unwrap_or(false);
        self.sync();
        let notice = if saved {
            Notice::info("Draft saved")
        } else if !form.has_content() {
            Notice::info("Nothing to save yet")
        } else if self.ui.with_untracked(DraftUiState::show_prompt) {
            Notice::info("Restore or discard the saved draft first")
        } else {
            Notice::error("Could not save draft")
        };
        self.ui.update(|ui| ui.notify(notice));
    }

    /// "Clear Draft": delete the stored snapshot. The live form is kept.
    pub fn clear(&self) {
        let cleared = self.session.try_update_value(|s| s.clear(now())).unwrap_or(false);
        self.sync();
        let notice = if cleared {
            Notice::info("Draft cleared")
        } else {
            Notice::error("Could not clear draft")
        };
        self.ui.update(|ui| ui.notify(notice));
    }

    pub fn set_auto_save(&self, enabled: bool) {
        self.session.update_value(|s| s.set_auto_save(enabled));
        self.sync();
    }

    /// Validate, run `create`, then settle the draft: cleared on success,
    /// kept on failure.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] without calling `create`, or
    /// [`SubmitError::Backend`] with the create error's text.
    pub async fn submit<F, Fut, R, E>(&self, create: F) -> Result<R, SubmitError>
    where
        F: FnOnce(T::Payload) -> Fut,
        Fut: Future<Output = Result<R, E>>,
        E: Display,
    {
        let form = self.form.get_untracked();
        let payload = prepare(&form)?;
        let result = create(payload).await;
        self.session.try_update_value(|s| s.finish_submit(&result, now()));
        self.sync();
        result.map_err(SubmitError::backend)
    }

    fn sync(&self) {
        self.session.try_with_value(|s| self.ui.update(|ui| ui.sync(s)));
    }
}
