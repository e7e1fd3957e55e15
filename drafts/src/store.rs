//! Typed draft store: one snapshot per form kind.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only code that reads or writes a draft key. Sessions,
//! the browser hooks, and the CLI all go through it.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::marker::PhantomData;

use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::error::DraftError;
use crate::forms::DraftForm;
use crate::snapshot::DraftSnapshot;
use crate::storage::DraftStorage;

/// Indicators shown next to the form ("Draft saved 12:03").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DraftStatus {
    pub draft_exists: bool,
    pub last_saved_at: Option<OffsetDateTime>,
}

/// Draft persistence for form type `T` over backend `S`.
#[derive(Debug)]
pub struct DraftStore<T, S> {
    key: String,
    storage: S,
    status: DraftStatus,
    _form: PhantomData<fn() -> T>,
}

impl<T: DraftForm, S: DraftStorage> DraftStore<T, S> {
    /// Store under the form kind's fixed key.
    pub fn new(storage: S) -> Self {
        Self::with_key(T::KIND.storage_key(), storage)
    }

    pub fn with_key(key: impl Into<String>, storage: S) -> Self {
        Self {
            key: key.into(),
            storage,
            status: DraftStatus::default(),
            _form: PhantomData,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn status(&self) -> DraftStatus {
        self.status
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write `form` with timestamp `now`, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Serialize`] or the backend's write error. The
    /// in-memory status is unchanged on failure.
    pub fn save(&mut self, form: &T, now: OffsetDateTime) -> Result<OffsetDateTime, DraftError> {
        let snapshot = DraftSnapshot::new(form, now);
        let raw = snapshot.to_json().map_err(DraftError::Serialize)?;
        self.storage.set(&self.key, &raw)?;
        self.status = DraftStatus {
            draft_exists: true,
            last_saved_at: Some(now),
        };
        debug!(key = %self.key, bytes = raw.len(), "draft saved");
        Ok(now)
    }

    /// Read the stored snapshot without touching status.
    ///
    /// # Errors
    ///
    /// Returns the backend's read error, or [`DraftError::Corrupt`] when the
    /// stored text is not a valid snapshot.
    pub fn peek(&self) -> Result<Option<DraftSnapshot<T>>, DraftError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };
        DraftSnapshot::from_json(&raw)
            .map(Some)
            .map_err(|source| DraftError::Corrupt {
                key: self.key.clone(),
                source,
            })
    }

    /// True if a value is stored under the key. Read failures count as absent.
    #[must_use]
    pub fn exists(&self) -> bool {
        match self.storage.get(&self.key) {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "draft presence check failed");
                false
            }
        }
    }

    /// Read the stored snapshot and adopt its timestamp as "last saved".
    ///
    /// # Errors
    ///
    /// Same as [`DraftStore::peek`]; status is unchanged on failure.
    pub fn load(&mut self) -> Result<Option<DraftSnapshot<T>>, DraftError> {
        let snapshot = self.peek()?;
        self.status = match &snapshot {
            Some(snap) => DraftStatus {
                draft_exists: true,
                last_saved_at: snap.timestamp,
            },
            None => DraftStatus::default(),
        };
        Ok(snapshot)
    }

    /// Remove the stored snapshot. Clearing an absent draft succeeds.
    ///
    /// # Errors
    ///
    /// Returns the backend's error; status is unchanged on failure.
    pub fn clear(&mut self) -> Result<(), DraftError> {
        self.storage.remove(&self.key)?;
        self.status = DraftStatus::default();
        debug!(key = %self.key, "draft cleared");
        Ok(())
    }
}
