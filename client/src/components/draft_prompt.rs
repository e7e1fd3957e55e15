//! Recovery prompt shown when a stored draft is found on mount.

use leptos::prelude::*;

use crate::state::draft::{DraftUiState, prompt_message};

/// "Restore / Start fresh" banner. Hidden once the user answers.
#[component]
pub fn DraftPrompt(
    ui: RwSignal<DraftUiState>,
    label: &'static str,
    on_restore: Callback<()>,
    on_discard: Callback<()>,
) -> impl IntoView {
    let message = move || prompt_message(label, ui.get().stored_at);

    view! {
        <Show when=move || ui.get().show_prompt()>
            <div class="draft-prompt" role="alertdialog" aria-live="polite">
                <p class="draft-prompt__message">{message}</p>
                <div class="draft-prompt__actions">
                    <button class="draft-prompt__restore" on:click=move |_| on_restore.run(())>
                        "Restore draft"
                    </button>
                    <button class="draft-prompt__discard" on:click=move |_| on_discard.run(())>
                        "Start fresh"
                    </button>
                </div>
            </div>
        </Show>
    }
}
