//! REST helpers for the CMS backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since slug checks, creates,
//! and uploads only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` with text fit for a toast. A
//! failed create surfaces the backend's `message` field when it sends one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use drafts::EntityKind;
use serde::Serialize;

use super::types::{CreatedEntity, MediaAsset};
#[cfg(feature = "hydrate")]
use super::types::{MediaList, SlugAvailability};

#[cfg(any(test, feature = "hydrate"))]
const MEDIA_ENDPOINT: &str = "/api/media";

#[cfg(any(test, feature = "hydrate"))]
fn collection_endpoint(kind: EntityKind) -> String {
    format!("/api/{}", kind.collection())
}

#[cfg(any(test, feature = "hydrate"))]
fn check_slug_endpoint(kind: EntityKind, slug: &str) -> String {
    format!("/api/{}/check-slug?slug={slug}", kind.collection())
}

#[cfg(any(test, feature = "hydrate"))]
fn slug_check_failed_message(status: u16) -> String {
    format!("slug check failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_failed_message(status: u16) -> String {
    format!("upload failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn media_list_failed_message(status: u16) -> String {
    format!("media list failed: {status}")
}

/// Ask `GET /api/{collection}/check-slug` whether `slug` is free.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status. Callers must not read an error as "taken".
pub async fn check_slug_availability(kind: EntityKind, slug: &str) -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = check_slug_endpoint(kind, slug);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(slug_check_failed_message(resp.status()));
        }
        let body: SlugAvailability = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.available)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, slug);
        Err("not available on server".to_owned())
    }
}

/// Create an entity via `POST /api/{collection}`.
///
/// # Errors
///
/// Returns the backend's `message` for a rejected create, a generic
/// fallback when the body has none, or the transport error text.
pub async fn create_entity<P: Serialize>(kind: EntityKind, payload: &P) -> Result<CreatedEntity, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = collection_endpoint(kind);
        let resp = gloo_net::http::Request::post(&url)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%kind, status = resp.status(), "create failed");
            return Err(drafts::submit::backend_error_message(&body));
        }
        resp.json::<CreatedEntity>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, payload);
        Err("not available on server".to_owned())
    }
}

/// Upload an image via `POST /api/media` as multipart field `file`.
///
/// # Errors
///
/// Returns an error string if the form data cannot be built, the request
/// fails, or the server responds with a non-OK status.
#[cfg(feature = "hydrate")]
pub async fn upload_media(file: &web_sys::File) -> Result<MediaAsset, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("{e:?}"))?;
    let resp = gloo_net::http::Request::post(MEDIA_ENDPOINT)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(upload_failed_message(resp.status()));
    }
    resp.json::<MediaAsset>().await.map_err(|e| e.to_string())
}

/// Fetch the media gallery from `GET /api/media`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn list_media() -> Result<Vec<MediaAsset>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(MEDIA_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(media_list_failed_message(resp.status()));
        }
        let body: MediaList = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
