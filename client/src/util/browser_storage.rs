//! `localStorage` backend for form drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the `drafts::DraftStorage` seam over `window.localStorage`, so
//! every form page hands its `DraftSession` the same origin-scoped store.
//! During SSR there is no window: reads report nothing stored and writes fail
//! as [`StorageError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! web-sys reports failures as opaque `JsValue`s. A `QuotaExceededError` from
//! `setItem` maps to [`StorageError::Quota`]; anything else becomes
//! [`StorageError::Backend`] with the exception text.

#[cfg(test)]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

use drafts::{DraftStorage, StorageError};

/// Drafts kept in the page origin's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(exception_name: Option<&str>, text: String) -> StorageError {
    match exception_name {
        Some("QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED") => StorageError::Quota,
        _ => StorageError::Backend(text),
    }
}

#[cfg(feature = "hydrate")]
fn js_failure(err: &wasm_bindgen::JsValue) -> StorageError {
    let name = js_sys::Reflect::get(err, &wasm_bindgen::JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string());
    let text = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    classify_failure(name.as_deref(), text)
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl DraftStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            // Private browsing can deny storage outright; treat that as empty.
            let Ok(storage) = local_storage() else {
                return Ok(None);
            };
            storage.get_item(key).map_err(|e| js_failure(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| js_failure(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| js_failure(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
