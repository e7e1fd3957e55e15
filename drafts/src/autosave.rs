//! Autosave timing policy.
//!
//! DESIGN
//! ======
//! The scheduler is a pure state machine over caller-supplied timestamps.
//! Hosts (a browser timer loop, a test) ask [`Autosaver::is_due`] and report
//! writes with [`Autosaver::mark_saved`]; nothing here sleeps or spawns.

#[cfg(test)]
#[path = "autosave_test.rs"]
mod autosave_test;

use time::{Duration, OffsetDateTime};

use crate::entity::EntityKind;

/// When background saves fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutosavePolicy {
    /// Save on the ticks of a fixed cadence that starts at mount and restarts
    /// at each save. An edit waits for the next tick.
    Interval(Duration),
    /// Save once edits have been quiet for the given delay.
    Debounce(Duration),
}

impl AutosavePolicy {
    #[must_use]
    pub fn period(self) -> Duration {
        match self {
            Self::Interval(d) | Self::Debounce(d) => d,
        }
    }

    /// Keep the policy kind but replace its period with `secs`, when given.
    /// Non-positive values are ignored.
    #[must_use]
    pub fn with_override(self, secs: Option<i64>) -> Self {
        match secs {
            Some(secs) if secs > 0 => match self {
                Self::Interval(_) => Self::Interval(Duration::seconds(secs)),
                Self::Debounce(_) => Self::Debounce(Duration::seconds(secs)),
            },
            _ => self,
        }
    }

    /// Default policy for `kind`, overridden by `CMS_AUTOSAVE_<KIND>_SECS`.
    #[must_use]
    pub fn from_env_override(kind: EntityKind) -> Self {
        let key = format!("CMS_AUTOSAVE_{}_SECS", kind.to_string().to_ascii_uppercase());
        let default = kind.autosave_policy();
        let Ok(raw) = std::env::var(&key) else {
            return default;
        };
        let Ok(secs) = raw.trim().parse::<i64>() else {
            tracing::warn!(%key, %raw, "ignoring unparseable autosave override");
            return default;
        };
        default.with_override(Some(secs))
    }
}

/// Decides when the next background save is due.
#[derive(Clone, Debug)]
pub struct Autosaver {
    policy: AutosavePolicy,
    enabled: bool,
    /// Mount time, or the time of the last successful save.
    anchor: OffsetDateTime,
    last_change: Option<OffsetDateTime>,
    dirty: bool,
}

impl Autosaver {
    #[must_use]
    pub fn new(policy: AutosavePolicy, now: OffsetDateTime) -> Self {
        Self {
            policy,
            enabled: true,
            anchor: now,
            last_change: None,
            dirty: false,
        }
    }

    #[must_use]
    pub fn policy(&self) -> AutosavePolicy {
        self.policy
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// True when an edit has happened since the last save.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn note_change(&mut self, now: OffsetDateTime) {
        self.dirty = true;
        self.last_change = Some(now);
    }

    /// Earliest time a background save may fire, if one is pending.
    #[must_use]
    pub fn next_due(&self) -> Option<OffsetDateTime> {
        if !self.enabled || !self.dirty {
            return None;
        }
        match self.policy {
            AutosavePolicy::Interval(period) => self.last_change.map(|at| next_tick(self.anchor, period, at)),
            AutosavePolicy::Debounce(delay) => self.last_change.map(|at| at + delay),
        }
    }

    #[must_use]
    pub fn is_due(&self, now: OffsetDateTime) -> bool {
        self.next_due().is_some_and(|due| now >= due)
    }

    pub fn mark_saved(&mut self, now: OffsetDateTime) {
        self.dirty = false;
        self.anchor = now;
    }

    /// Restart timing from `now`, forgetting pending edits.
    pub fn reset(&mut self, now: OffsetDateTime) {
        self.dirty = false;
        self.last_change = None;
        self.anchor = now;
    }
}

/// First tick of the `origin + k * period` cadence (k >= 1) at or after `at`.
fn next_tick(origin: OffsetDateTime, period: Duration, at: OffsetDateTime) -> OffsetDateTime {
    let first = origin + period;
    if at <= first {
        return first;
    }
    let period_ms = period.whole_milliseconds();
    if period_ms <= 0 {
        return at;
    }
    let rem = (at - origin).whole_milliseconds() % period_ms;
    if rem == 0 {
        return at;
    }
    at + Duration::milliseconds(i64::try_from(period_ms - rem).unwrap_or_default())
}
