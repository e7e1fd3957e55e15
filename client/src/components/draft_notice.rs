//! Dismissible toast for draft and submit outcomes.

use leptos::prelude::*;

use crate::state::draft::{DraftUiState, NoticeLevel};

#[component]
pub fn DraftNotice(ui: RwSignal<DraftUiState>) -> impl IntoView {
    let notice = move || ui.get().notice;

    view! {
        {move || {
            notice()
                .map(|n| {
                    let class = match n.level {
                        NoticeLevel::Info => "draft-notice draft-notice--info",
                        NoticeLevel::Error => "draft-notice draft-notice--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span>{n.text}</span>
                            <button
                                class="draft-notice__close"
                                title="Dismiss"
                                on:click=move |_| ui.update(DraftUiState::dismiss_notice)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
