//! Create-then-clear submission flow.
//!
//! The create request itself is a caller-supplied async closure (browser
//! fetch, CLI HTTP client, test stub). Only the draft bookkeeping lives here:
//! a successful create removes the stored snapshot, a failed one keeps it so
//! the user can retry without losing work.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::fmt::Display;
use std::future::Future;

use serde::Deserialize;
use time::OffsetDateTime;

use crate::forms::DraftForm;
use crate::session::DraftSession;
use crate::storage::DraftStorage;
use crate::validate::ValidationErrors;

pub const GENERIC_SUBMIT_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("please fix the highlighted fields ({0})")]
    Invalid(#[from] ValidationErrors),
    /// Create call failed; carries the text to show the user.
    #[error("{0}")]
    Backend(String),
}

impl SubmitError {
    /// Backend failure carrying `message`, or the generic text when it is blank.
    #[must_use]
    pub fn backend(message: impl Display) -> Self {
        let message = message.to_string();
        Self::Backend(if message.trim().is_empty() {
            GENERIC_SUBMIT_FAILURE.to_owned()
        } else {
            message
        })
    }
}

/// Validate `form` and build its create payload.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] with every failed field rule.
pub fn prepare<T: DraftForm>(form: &T) -> Result<T::Payload, SubmitError> {
    form.validate()?;
    Ok(form.to_payload())
}

/// Validate, create, then settle the draft.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] without calling `create` when validation
/// fails, or [`SubmitError::Backend`] with the create error's text.
pub async fn submit<T, S, F, Fut, R, E>(
    session: &mut DraftSession<T, S>,
    form: &T,
    now: OffsetDateTime,
    create: F,
) -> Result<R, SubmitError>
where
    T: DraftForm,
    S: DraftStorage,
    F: FnOnce(T::Payload) -> Fut,
    Fut: Future<Output = Result<R, E>>,
    E: Display,
{
    let payload = prepare(form)?;
    let result = create(payload).await;
    session.finish_submit(&result, now);
    result.map_err(SubmitError::backend)
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// User-facing text for a failed create response: the backend's `message`
/// field when present, else a generic fallback.
#[must_use]
pub fn backend_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(m) }) if !m.trim().is_empty() => m,
        _ => GENERIC_SUBMIT_FAILURE.to_owned(),
    }
}
