//! Draft chrome state: recovery prompt, autosave status, toasts.
//!
//! DESIGN
//! ======
//! The `DraftSession` lives outside the reactive graph. After every session
//! call the hook copies what the view needs into this plain struct, so the
//! components render from one `RwSignal<DraftUiState>` and stay testable
//! without a browser.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use drafts::{AutosavePolicy, DraftForm, DraftPhase, DraftSession, DraftStatus, DraftStorage};
use time::{Duration, OffsetDateTime};

/// Severity of a transient toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    #[default]
    Info,
    Error,
}

/// One toast message shown above the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Snapshot of the draft session for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftUiState {
    pub phase: DraftPhase,
    /// Timestamp of the stored draft while the recovery prompt is open.
    pub stored_at: Option<OffsetDateTime>,
    pub status: DraftStatus,
    pub auto_save: bool,
    pub policy: Option<AutosavePolicy>,
    pub notice: Option<Notice>,
}

impl Default for DraftUiState {
    fn default() -> Self {
        Self {
            phase: DraftPhase::NoDraft,
            stored_at: None,
            status: DraftStatus::default(),
            auto_save: true,
            policy: None,
            notice: None,
        }
    }
}

impl DraftUiState {
    /// Copy the session's current view. The toast is left as it was.
    pub fn sync<T: DraftForm, S: DraftStorage>(&mut self, session: &DraftSession<T, S>) {
        self.phase = session.phase();
        self.stored_at = if self.phase.awaiting_choice() {
            session.stored_at()
        } else {
            None
        };
        self.status = session.status();
        self.auto_save = session.auto_save_enabled();
        self.policy = Some(session.policy());
    }

    pub fn show_prompt(&self) -> bool {
        self.phase.awaiting_choice()
    }

    /// "Clear Draft" is offered only while something is stored.
    pub fn can_clear(&self) -> bool {
        self.status.draft_exists || self.phase.has_draft()
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Relative "last saved" label for the autosave bar.
pub fn saved_label(saved_at: Option<OffsetDateTime>, now: OffsetDateTime) -> String {
    let Some(saved_at) = saved_at else {
        return "Not saved yet".to_owned();
    };
    let age = now - saved_at;
    if age < Duration::seconds(10) {
        "Saved just now".to_owned()
    } else if age < Duration::minutes(1) {
        format!("Saved {}s ago", age.whole_seconds())
    } else if age < Duration::hours(1) {
        format!("Saved {} min ago", age.whole_minutes())
    } else {
        format!("Saved at {}", clock_time(saved_at))
    }
}

/// Prompt body naming when the stored draft was written.
pub fn prompt_message(label: &str, stored_at: Option<OffsetDateTime>) -> String {
    match stored_at {
        Some(ts) => format!(
            "You have an unsaved {} draft from {} {}. Restore it?",
            label.to_lowercase(),
            ts.date(),
            clock_time(ts)
        ),
        None => format!("You have an unsaved {} draft. Restore it?", label.to_lowercase()),
    }
}

/// Short description of the autosave cadence for the toggle tooltip.
pub fn policy_hint(policy: AutosavePolicy) -> String {
    match policy {
        AutosavePolicy::Interval(period) => format!("Saves every {}s", period.whole_seconds()),
        AutosavePolicy::Debounce(delay) => format!("Saves {}s after you stop typing", delay.whole_seconds()),
    }
}

fn clock_time(ts: OffsetDateTime) -> String {
    format!("{:02}:{:02} UTC", ts.hour(), ts.minute())
}
