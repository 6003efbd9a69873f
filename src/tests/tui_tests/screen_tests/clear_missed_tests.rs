//! Clear-all-missed flow tests

use crate::tui::{CallTab, CallsScreen, ConfirmOutcome, PendingConfirmation};
use super::helpers::names;

#[test]
fn test_request_clear_all_missed_opens_dialog() {
    let mut screen = CallsScreen::new();

    assert!(screen.request_clear_all_missed());
    assert_eq!(screen.pending(), Some(PendingConfirmation::ClearAllMissed));
    assert_eq!(screen.missed_calls().len(), 3, "Nothing cleared before confirmation");
}

#[test]
fn test_confirm_clear_all_missed() {
    let mut screen = CallsScreen::new();

    screen.request_clear_all_missed();
    let outcome = screen.confirm();

    assert_eq!(outcome, Some(ConfirmOutcome::ClearedMissed { removed: 3 }));
    assert!(screen.missed_calls().is_empty());
    assert_eq!(
        names(screen.all_calls()),
        vec!["Jane Doe", "John Smith", "Team Alpha", "Alex Johnson", "Michael Chen"],
        "Answered calls survive in their original order"
    );
    assert!(screen.all_calls().iter().all(|c| !c.is_missed()));

    let notification = screen.notification.as_ref().expect("Clear should notify");
    assert_eq!(notification.message, "All missed calls cleared");
}

#[test]
fn test_clear_all_missed_when_empty_is_noop() {
    let mut screen = CallsScreen::new();
    screen.request_clear_all_missed();
    screen.confirm();
    screen.notification = None;
    let all_before = screen.all_calls().to_vec();

    assert!(!screen.request_clear_all_missed(), "No dialog for an empty missed list");
    assert!(screen.pending().is_none());
    assert_eq!(screen.all_calls(), all_before.as_slice());
    assert!(screen.notification.is_none());
}

#[test]
fn test_cancel_clear_all_missed_keeps_lists() {
    let mut screen = CallsScreen::new();
    let all_before = screen.all_calls().to_vec();
    let missed_before = screen.missed_calls().to_vec();

    screen.request_clear_all_missed();
    screen.cancel();

    assert_eq!(screen.all_calls(), all_before.as_slice());
    assert_eq!(screen.missed_calls(), missed_before.as_slice());
}

#[test]
fn test_clear_after_missed_tab_delete_still_clears_all_tab() {
    let mut screen = CallsScreen::new();
    screen.select_tab(CallTab::Missed);

    // Remove Mom from the Missed list only
    screen.request_delete(0);
    screen.confirm();
    assert_eq!(screen.all_calls().len(), 8);

    screen.request_clear_all_missed();
    let outcome = screen.confirm();

    // All three missed records leave the All list, including Mom
    assert_eq!(outcome, Some(ConfirmOutcome::ClearedMissed { removed: 3 }));
    assert_eq!(screen.all_calls().len(), 5);
    assert!(screen.missed_calls().is_empty());
}

#[test]
fn test_clear_on_missed_tab_resets_cursor() {
    let mut screen = CallsScreen::new();
    screen.select_tab(CallTab::Missed);
    screen.select_row(2);

    screen.request_clear_all_missed();
    screen.confirm();

    assert_eq!(screen.selected_index(), 0);
    assert!(screen.current_calls().is_empty());
}
