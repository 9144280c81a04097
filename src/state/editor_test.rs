use super::*;

fn image(src: &str) -> EditorImage {
    EditorImage { src: src.to_owned(), width: 800, height: 600 }
}

fn loaded_state() -> EditorState {
    let mut state = EditorState::default();
    let token = state.begin_upload();
    assert!(state.load_upload(token, image("data:original")));
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_has_no_image_and_midpoint_intensity() {
    let state = EditorState::default();
    assert!(state.current.is_none());
    assert!(state.original.is_none());
    assert_eq!(state.effect, "");
    assert_eq!(state.intensity, 50);
    assert!(!state.editor_enabled);
    assert!(!state.loading());
}

#[test]
fn set_intensity_clamps_to_hundred() {
    let mut state = EditorState::default();
    state.set_intensity(73);
    assert_eq!(state.intensity, 73);
    state.set_intensity(250);
    assert_eq!(state.intensity, 100);
}

// =============================================================
// Uploads
// =============================================================

#[test]
fn load_upload_sets_original_and_current() {
    let state = loaded_state();
    assert_eq!(state.original, Some(image("data:original")));
    assert_eq!(state.current, Some(image("data:original")));
    assert_eq!(state.render_seq, 1);
}

#[test]
fn stale_upload_preview_and_load_are_ignored() {
    let mut state = EditorState::default();
    let first = state.begin_upload();
    let second = state.begin_upload();

    assert!(!state.show_preview(first, "data:first".to_owned()));
    assert!(state.preview.is_none());
    assert!(state.show_preview(second, "data:second".to_owned()));
    assert_eq!(state.preview.as_deref(), Some("data:second"));
    assert!(state.editor_enabled);

    assert!(!state.load_upload(first, image("data:first")));
    assert!(state.current.is_none());
}

#[test]
fn new_upload_invalidates_outstanding_effect() {
    let mut state = loaded_state();
    let effect = state.begin_effect_request();
    let upload = state.begin_upload();
    assert!(state.load_upload(upload, image("data:newer")));
    assert!(!state.loading());
    assert!(!state.finish_effect_request(effect, Some(image("data:processed"))));
    assert_eq!(state.current, Some(image("data:newer")));
}

// =============================================================
// Effect tokens
// =============================================================

#[test]
fn effect_success_replaces_current_and_clears_loading() {
    let mut state = loaded_state();
    let token = state.begin_effect_request();
    assert!(state.loading());
    assert!(state.finish_effect_request(token, Some(image("data:sepia"))));
    assert!(!state.loading());
    assert_eq!(state.current, Some(image("data:sepia")));
    assert_eq!(state.original, Some(image("data:original")));
}

#[test]
fn effect_failure_keeps_current_image() {
    let mut state = loaded_state();
    let token = state.begin_effect_request();
    assert!(state.finish_effect_request(token, None));
    assert!(!state.loading());
    assert_eq!(state.current, Some(image("data:original")));
}

#[test]
fn older_effect_response_arriving_last_is_discarded() {
    let mut state = loaded_state();
    let older = state.begin_effect_request();
    let newer = state.begin_effect_request();

    assert!(state.finish_effect_request(newer, Some(image("data:newer"))));
    assert!(!state.finish_effect_request(older, Some(image("data:older"))));
    assert_eq!(state.current, Some(image("data:newer")));
}

#[test]
fn stale_response_leaves_loading_for_latest_request() {
    let mut state = loaded_state();
    let older = state.begin_effect_request();
    let newer = state.begin_effect_request();
    assert!(!state.finish_effect_request(older, None));
    assert!(state.loading());
    assert!(state.is_latest_effect(newer));
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_without_original_is_noop() {
    let mut state = EditorState::default();
    state.select_effect("blur");
    state.set_intensity(80);
    assert!(!state.reset());
    assert_eq!(state.effect, "blur");
    assert_eq!(state.intensity, 80);
    assert!(state.current.is_none());
}

#[test]
fn reset_restores_copy_of_original_and_clears_selection() {
    let mut state = loaded_state();
    state.select_effect("sepia");
    state.set_intensity(90);
    let token = state.begin_effect_request();
    assert!(state.finish_effect_request(token, Some(image("data:sepia"))));

    assert!(state.reset());
    assert_eq!(state.current, state.original);
    assert_eq!(state.effect, "");
    assert_eq!(state.intensity, 50);
}

#[test]
fn reset_discards_in_flight_effect() {
    let mut state = loaded_state();
    let token = state.begin_effect_request();
    assert!(state.reset());
    assert!(!state.loading());
    assert!(!state.finish_effect_request(token, Some(image("data:late"))));
    assert_eq!(state.current, Some(image("data:original")));
}
