use super::*;

// =============================================================
// Dropdowns
// =============================================================

#[test]
fn ui_state_default_has_everything_closed() {
    let state = UiState::default();
    assert!(state.open_dropdown.is_none());
    assert!(!state.mobile_menu_open);
    assert!(state.alerts.is_empty());
}

#[test]
fn toggle_dropdown_opens_then_closes() {
    let mut state = UiState::default();
    state.toggle_dropdown("account");
    assert!(state.is_dropdown_open("account"));
    state.toggle_dropdown("account");
    assert!(!state.is_dropdown_open("account"));
}

#[test]
fn opening_a_dropdown_closes_the_other() {
    let mut state = UiState::default();
    state.toggle_dropdown("account");
    state.toggle_dropdown("help");
    assert!(!state.is_dropdown_open("account"));
    assert!(state.is_dropdown_open("help"));
}

#[test]
fn outside_click_closes_open_dropdown() {
    let mut state = UiState::default();
    state.toggle_dropdown("account");
    state.close_dropdowns_on_outside_click(None);
    assert!(state.open_dropdown.is_none());
}

#[test]
fn click_inside_open_dropdown_keeps_it_open() {
    let mut state = UiState::default();
    state.toggle_dropdown("account");
    state.close_dropdowns_on_outside_click(Some("account"));
    assert!(state.is_dropdown_open("account"));
}

// =============================================================
// Mobile menu and alerts
// =============================================================

#[test]
fn toggle_mobile_menu_flips() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn dismiss_alert_removes_only_that_alert() {
    let mut state = UiState::with_alerts(vec![
        FlashMessage { level: "success".to_owned(), text: "Saved".to_owned() },
        FlashMessage { level: "error".to_owned(), text: "Oops".to_owned() },
    ]);
    state.dismiss_alert(0);
    assert_eq!(state.alerts.len(), 1);
    assert_eq!(state.alerts[0].text, "Oops");
    state.dismiss_alert(5);
    assert_eq!(state.alerts.len(), 1);
}

#[test]
fn flash_message_level_defaults_to_info() {
    let parsed: FlashMessage = serde_json::from_str(r#"{"text":"Welcome"}"#).unwrap();
    assert_eq!(parsed.level, "info");
}

#[test]
fn outside_click_with_nothing_open_changes_nothing() {
    let state = UiState::default();
    assert!(!state.outside_click_closes(None));
    assert!(!state.outside_click_closes(Some("help")));
}

#[test]
fn outside_click_closes_only_foreign_clicks() {
    let mut state = UiState::default();
    state.toggle_dropdown("help");
    assert!(!state.outside_click_closes(Some("help")));
    assert!(state.outside_click_closes(Some("account")));
    assert!(state.outside_click_closes(None));
}
