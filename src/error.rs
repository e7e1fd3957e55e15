//! Errors surfaced by the `cms-drafts` operator CLI.

use drafts::slug::SlugError;
use drafts::{DraftError, EntityKind, StorageError, SubmitError, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("draft directory unusable: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error("no stored {0} draft")]
    NoDraft(EntityKind),
    #[error("draft is invalid: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error("invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),
    #[error("submit failed: {0}")]
    Submit(#[from] SubmitError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
