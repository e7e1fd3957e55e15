//! Draft chrome rendered around the "new entity" forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `DraftUiState` / `SlugStatus` signals from the hooks in
//! `util` and report user choices through callbacks, so a page wires them
//! to its `DraftHandle` without the components knowing the form type.

pub mod autosave_bar;
pub mod draft_notice;
pub mod draft_prompt;
pub mod slug_hint;
