//! Draft inspection and submission against a file-backed draft directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! The operator CLI reads the same snapshots the admin forms write, through
//! `drafts::FileStorage`. Each command is generic over the form type; the
//! [`with_form!`] macro picks the concrete type for an `EntityKind`.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use drafts::{AutosavePolicy, DraftForm, DraftPhase, DraftSession, DraftStorage, DraftStore, EntityKind};
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;

use crate::api::ApiClient;
use crate::error::CliError;

/// Run `$body` with `$form` bound to the form type for `$kind`.
macro_rules! with_form {
    ($kind:expr, $form:ident => $body:expr) => {
        match $kind {
            ::drafts::EntityKind::Blog => {
                type $form = ::drafts::forms::BlogForm;
                $body
            }
            ::drafts::EntityKind::Industry => {
                type $form = ::drafts::forms::IndustryForm;
                $body
            }
            ::drafts::EntityKind::Project => {
                type $form = ::drafts::forms::ProjectForm;
                $body
            }
            ::drafts::EntityKind::Service => {
                type $form = ::drafts::forms::ServiceForm;
                $body
            }
        }
    };
}

pub(crate) use with_form;

/// One row of `cms-drafts list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSummary {
    pub kind: EntityKind,
    pub key: &'static str,
    pub exists: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub saved_at: Option<OffsetDateTime>,
    pub age_secs: Option<i64>,
    pub slug: Option<String>,
    /// `None` when the stored snapshot cannot be parsed.
    pub valid: Option<bool>,
}

/// Summarize the stored draft for `T`. Corrupt snapshots are reported, not fatal.
pub fn summarize<T: DraftForm, S: DraftStorage>(storage: S, now: OffsetDateTime) -> DraftSummary {
    let store: DraftStore<T, S> = DraftStore::new(storage);
    let mut summary = DraftSummary {
        kind: T::KIND,
        key: T::KIND.storage_key(),
        exists: store.exists(),
        saved_at: None,
        age_secs: None,
        slug: None,
        valid: None,
    };
    match store.peek() {
        Ok(Some(snapshot)) => {
            summary.saved_at = snapshot.timestamp;
            summary.age_secs = snapshot.age(now).map(|d| d.whole_seconds());
            summary.slug = Some(snapshot.data.slug().to_owned()).filter(|s| !s.is_empty());
            summary.valid = Some(snapshot.data.validate().is_ok());
        }
        Ok(None) => {}
        Err(e) => tracing::warn!(key = %store.key(), error = %e, "stored draft is unreadable"),
    }
    summary
}

/// Summaries for every entity kind, in [`EntityKind::ALL`] order.
pub fn list<S: DraftStorage>(storage: &S, now: OffsetDateTime) -> Vec<DraftSummary> {
    EntityKind::ALL
        .iter()
        .map(|kind| with_form!(*kind, F => summarize::<F, _>(storage, now)))
        .collect()
}

/// The stored snapshot as JSON, exactly as the form would restore it.
///
/// # Errors
///
/// Returns [`CliError::NoDraft`] when nothing is stored, or the parse error.
pub fn show<T: DraftForm, S: DraftStorage>(storage: S) -> Result<Value, CliError> {
    let store: DraftStore<T, S> = DraftStore::new(storage);
    let snapshot = store.peek()?.ok_or(CliError::NoDraft(T::KIND))?;
    Ok(serde_json::to_value(&snapshot)?)
}

/// Delete the stored draft. Clearing a missing draft succeeds.
///
/// # Errors
///
/// Returns the storage error if the file cannot be removed.
pub fn clear<T: DraftForm, S: DraftStorage>(storage: S) -> Result<(), CliError> {
    let mut store: DraftStore<T, S> = DraftStore::new(storage);
    store.clear()?;
    tracing::info!(key = %store.key(), "draft cleared");
    Ok(())
}

/// Check the stored draft against the entity's submission rules.
///
/// # Errors
///
/// Returns [`CliError::Invalid`] listing every failed field, or
/// [`CliError::NoDraft`] / the parse error.
pub fn validate<T: DraftForm, S: DraftStorage>(storage: S) -> Result<(), CliError> {
    let store: DraftStore<T, S> = DraftStore::new(storage);
    let snapshot = store.peek()?.ok_or(CliError::NoDraft(T::KIND))?;
    snapshot.data.validate()?;
    Ok(())
}

/// Restore the stored draft, create it on the backend, and clear it on success.
///
/// # Errors
///
/// Returns [`CliError::NoDraft`] when nothing is stored, the parse error,
/// or the submit failure. A failed create leaves the draft in place.
pub async fn submit<T: DraftForm, S: DraftStorage>(
    storage: S,
    api: &ApiClient,
    now: OffsetDateTime,
) -> Result<Value, CliError> {
    let mut session: DraftSession<T, S> = DraftSession::new(storage, now);
    if session.mount(now) != DraftPhase::Pending {
        return Err(CliError::NoDraft(T::KIND));
    }
    let mut form = T::default();
    if !session.restore(&mut form, now)? {
        return Err(CliError::NoDraft(T::KIND));
    }
    let created = drafts::submit(&mut session, &form, now, |payload| async move {
        api.create(T::KIND, &payload).await
    })
    .await?;
    let kind = T::KIND;
    tracing::info!(%kind, "draft submitted and cleared");
    Ok(created)
}

/// Autosave timing per kind, with `CMS_AUTOSAVE_<KIND>_SECS` applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRow {
    pub kind: EntityKind,
    pub mode: &'static str,
    pub period_secs: i64,
}

pub fn policies() -> Vec<PolicyRow> {
    EntityKind::ALL
        .iter()
        .map(|&kind| policy_row(kind, AutosavePolicy::from_env_override(kind)))
        .collect()
}

fn policy_row(kind: EntityKind, policy: AutosavePolicy) -> PolicyRow {
    let mode = match policy {
        AutosavePolicy::Interval(_) => "interval",
        AutosavePolicy::Debounce(_) => "debounce",
    };
    PolicyRow {
        kind,
        mode,
        period_secs: policy.period().whole_seconds(),
    }
}
