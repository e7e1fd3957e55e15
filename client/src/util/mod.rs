//! Browser glue shared by form pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `window`, timer, and storage concerns from the
//! components so the draft behavior stays testable without a browser.

pub mod browser_storage;
pub mod draft_autosave;
pub mod slug_check;
