use super::*;
use drafts::DraftStatus;
use time::macros::datetime;

#[test]
fn toggle_label_reflects_state() {
    assert_eq!(toggle_label(true), "Auto-save on");
    assert_eq!(toggle_label(false), "Auto-save off");
}

#[test]
fn state_class_prefers_disabled_over_saved() {
    let saved = DraftUiState {
        status: DraftStatus {
            draft_exists: true,
            last_saved_at: Some(datetime!(2025-03-01 12:00:00 UTC)),
        },
        ..DraftUiState::default()
    };
    assert_eq!(autosave_state_class(&saved), "autosave-bar--saved");
    assert_eq!(
        autosave_state_class(&DraftUiState {
            auto_save: false,
            ..saved
        }),
        "autosave-bar--off"
    );
    assert_eq!(autosave_state_class(&DraftUiState::default()), "autosave-bar--idle");
}
