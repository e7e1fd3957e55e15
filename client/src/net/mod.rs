//! Networking for the CMS REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` makes the slug check, create, and media calls; `types` defines the
//! response bodies they decode.

pub mod api;
pub mod types;
