//! Auto-save toggle, "last saved" label, and manual draft actions.

#[cfg(test)]
#[path = "autosave_bar_test.rs"]
mod autosave_bar_test;

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::state::draft::{DraftUiState, policy_hint, saved_label};

/// Toolbar row above the form's submit button.
#[component]
pub fn AutosaveBar(
    ui: RwSignal<DraftUiState>,
    on_toggle: Callback<bool>,
    on_save: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let enabled = move || ui.get().auto_save;
    let label = move || saved_label(ui.get().status.last_saved_at, OffsetDateTime::now_utc());
    let hint = move || ui.get().policy.map(policy_hint).unwrap_or_default();
    let state_class = move || autosave_state_class(&ui.get());

    view! {
        <div class=move || format!("autosave-bar {}", state_class())>
            <label class="autosave-bar__toggle" title=hint>
                <input
                    type="checkbox"
                    prop:checked=enabled
                    on:change=move |ev| on_toggle.run(event_target_checked(&ev))
                />
                {move || toggle_label(enabled())}
            </label>
            <span class="autosave-bar__saved">{label}</span>
            <button class="autosave-bar__save" on:click=move |_| on_save.run(()) disabled=move || ui.get().show_prompt()>
                "Save Now"
            </button>
            <Show when=move || ui.get().can_clear()>
                <button class="autosave-bar__clear" on:click=move |_| on_clear.run(())>
                    "Clear Draft"
                </button>
            </Show>
        </div>
    }
}

fn toggle_label(enabled: bool) -> &'static str {
    if enabled { "Auto-save on" } else { "Auto-save off" }
}

fn autosave_state_class(ui: &DraftUiState) -> &'static str {
    if !ui.auto_save {
        "autosave-bar--off"
    } else if ui.status.draft_exists {
        "autosave-bar--saved"
    } else {
        "autosave-bar--idle"
    }
}
