//! Debounced slug availability hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `drafts::SlugCheckGate` for a form's slug field. Each keystroke
//! reschedules the check; under `hydrate` a poll loop sends the request once
//! the input has been quiet for the gate's delay, and only the newest answer
//! reaches the status signal.
//!
//! ERROR HANDLING
//! ==============
//! A failed request becomes `SlugStatus::CheckFailed`, so the form can tell
//! "could not check" apart from "already taken".

#[cfg(test)]
#[path = "slug_check_test.rs"]
mod slug_check_test;

use drafts::{EntityKind, SlugCheckGate, SlugStatus};
use leptos::prelude::*;
use time::OffsetDateTime;

/// Poll period of the slug check loop.
pub const SLUG_POLL: std::time::Duration = std::time::Duration::from_millis(250);

/// Reactive slug check state for one form.
#[derive(Clone, Copy)]
pub struct SlugCheck {
    pub kind: EntityKind,
    pub status: RwSignal<SlugStatus>,
    gate: StoredValue<SlugCheckGate>,
}

/// Mount a slug checker for `kind` and start its poll loop.
pub fn use_slug_check(kind: EntityKind) -> SlugCheck {
    let check = SlugCheck {
        kind,
        status: RwSignal::new(SlugStatus::Idle),
        gate: StoredValue::new(SlugCheckGate::default()),
    };

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(SLUG_POLL).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let Some(Some(request)) = check.gate.try_update_value(|g| g.poll(OffsetDateTime::now_utc())) else {
                    continue;
                };
                let kind = check.kind;
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::check_slug_availability(kind, &request.slug).await;
                    check.settle(request.seq, result);
                });
            }
        });
        on_cleanup(move || {
            alive.store(false, std::sync::atomic::Ordering::Relaxed);
            check.gate.try_update_value(SlugCheckGate::cancel);
        });
    }

    check
}

impl SlugCheck {
    /// Slug field input. Updates the status immediately and reschedules.
    pub fn on_input(&self, slug: &str) {
        self.on_input_at(slug, OffsetDateTime::now_utc());
    }

    pub fn on_input_at(&self, slug: &str, now: OffsetDateTime) {
        if let Some(input) = self.gate.try_update_value(|g| g.on_input(slug, now)) {
            self.status.set(input.status());
        }
    }

    /// Apply a backend answer for check `seq`. Stale answers are dropped.
    pub fn settle(&self, seq: u64, result: Result<bool, String>) {
        let resolved = self.gate.try_with_value(|g| g.resolve(seq, result)).flatten();
        if let Some(status) = resolved {
            self.status.try_set(status);
        }
    }
}
