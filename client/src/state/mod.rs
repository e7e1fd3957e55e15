//! Reactive UI state shared between hooks and components.

pub mod draft;
