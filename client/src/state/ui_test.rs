use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_all_closed() {
    let state = UiState::default();
    assert!(!state.header_scrolled);
    assert!(!state.mobile_menu_open);
    assert!(!state.copy_confirmed);
    assert_eq!(state.copy_seq, 0);
}

// =============================================================
// Sticky header
// =============================================================

#[test]
fn header_scrolled_only_past_threshold() {
    let mut state = UiState::default();
    state.page_scrolled(50.0);
    assert!(!state.header_scrolled);
    state.page_scrolled(51.0);
    assert!(state.header_scrolled);
    state.page_scrolled(0.0);
    assert!(!state.header_scrolled);
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn mobile_menu_toggles_and_closes() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
    state.toggle_mobile_menu();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Copy-link feedback
// =============================================================

#[test]
fn copy_revert_clears_confirmation() {
    let mut state = UiState::default();
    let seq = state.copy_succeeded();
    assert!(state.copy_confirmed);
    assert!(state.copy_revert_due(seq));
    assert!(!state.copy_confirmed);
}

#[test]
fn stale_revert_is_ignored_after_second_copy() {
    let mut state = UiState::default();
    let first = state.copy_succeeded();
    let second = state.copy_succeeded();
    assert_ne!(first, second);
    assert!(!state.copy_revert_due(first));
    assert!(state.copy_confirmed);
    assert!(state.copy_revert_due(second));
    assert!(!state.copy_confirmed);
}
