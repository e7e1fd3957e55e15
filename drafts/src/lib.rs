//! Local draft persistence for the CMS admin "new entity" forms.
//!
//! This crate owns the form models (blog, industry, project, service), the
//! snapshot wire shape, and the per-form draft controller shared by the
//! browser `client` and the `cms-drafts` CLI. Storage is reached only through
//! the [`DraftStorage`] trait so the lifecycle rules stay in one place.
//!
//! DESIGN
//! ======
//! One generic [`DraftStore`] keyed by [`EntityKind`] replaces a hand-copied
//! save/load/clear routine per form. Timing (interval vs debounce) is a
//! policy value, not a code path.

pub mod autosave;
pub mod entity;
pub mod error;
pub mod forms;
pub mod lifecycle;
pub mod session;
pub mod slug;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod submit;
pub mod validate;

pub use autosave::{AutosavePolicy, Autosaver};
pub use entity::EntityKind;
pub use error::{DraftError, StorageError};
pub use forms::DraftForm;
pub use lifecycle::{DraftEvent, DraftPhase};
pub use session::{DraftSession, SaveTrigger};
pub use slug::{SlugCheckGate, SlugCheckRequest, SlugInput, SlugSource, SlugStatus, slugify, validate_slug};
pub use snapshot::DraftSnapshot;
pub use storage::{DraftStorage, FileStorage, MemoryStorage};
pub use store::{DraftStatus, DraftStore};
pub use submit::{SubmitError, submit};
pub use validate::{FieldError, ValidationErrors};
