//! Availability hint rendered under the slug input.

#[cfg(test)]
#[path = "slug_hint_test.rs"]
mod slug_hint_test;

use drafts::SlugStatus;
use leptos::prelude::*;

#[component]
pub fn SlugHint(status: RwSignal<SlugStatus>) -> impl IntoView {
    view! {
        <p class=move || format!("slug-hint {}", slug_hint_class(&status.get()))>
            {move || status.get().message()}
        </p>
    }
}

fn slug_hint_class(status: &SlugStatus) -> &'static str {
    match status {
        SlugStatus::Idle => "slug-hint--idle",
        SlugStatus::Checking => "slug-hint--checking",
        SlugStatus::Available => "slug-hint--ok",
        SlugStatus::CheckFailed(_) => "slug-hint--warn",
        SlugStatus::TooShort | SlugStatus::Invalid(_) | SlugStatus::Taken => "slug-hint--error",
    }
}
