//! Single-row delete flow tests

use crate::tui::{CallTab, CallsScreen, ConfirmOutcome, PendingConfirmation};
use super::helpers::{names, small_history};

#[test]
fn test_request_delete_opens_dialog() {
    let mut screen = CallsScreen::new();

    assert!(screen.request_delete(2));
    assert!(screen.is_modal());
    assert_eq!(
        screen.pending(),
        Some(PendingConfirmation::DeleteCall {
            index: 2,
            tab: CallTab::All
        })
    );

    // Nothing removed before confirmation
    assert_eq!(screen.all_calls().len(), 8);
}

#[test]
fn test_request_delete_out_of_range() {
    let mut screen = CallsScreen::new();

    assert!(!screen.request_delete(8));
    assert!(!screen.is_modal());

    screen.select_tab(CallTab::Missed);
    assert!(!screen.request_delete(3));
    assert!(!screen.is_modal());
}

#[test]
fn test_confirm_delete_on_all_tab() {
    let mut screen = CallsScreen::new();

    screen.request_delete(2);
    let outcome = screen.confirm();

    assert_eq!(
        outcome,
        Some(ConfirmOutcome::Deleted {
            tab: CallTab::All,
            name: "John Smith".to_string()
        })
    );
    assert_eq!(screen.all_calls().len(), 7);
    assert_eq!(screen.missed_calls().len(), 3);
    assert!(!names(screen.all_calls()).contains(&"John Smith".to_string()));
    assert!(!screen.is_modal(), "Dialog closes after confirm");
}

#[test]
fn test_delete_missed_record_from_all_tab_keeps_missed_list() {
    let mut screen = CallsScreen::new();

    // "Mom" is missed and sits at index 1 of the All list
    screen.request_delete(1);
    screen.confirm();

    assert_eq!(screen.all_calls().len(), 7);
    assert!(!names(screen.all_calls()).contains(&"Mom".to_string()));
    assert_eq!(
        names(screen.missed_calls()),
        vec!["Mom", "David Brown", "Sarah Miller"],
        "Deleting from All leaves the Missed list alone"
    );
}

#[test]
fn test_confirm_delete_on_missed_tab() {
    let mut screen = CallsScreen::new();
    screen.select_tab(CallTab::Missed);

    screen.request_delete(0);
    let outcome = screen.confirm();

    assert_eq!(
        outcome,
        Some(ConfirmOutcome::Deleted {
            tab: CallTab::Missed,
            name: "Mom".to_string()
        })
    );
    assert_eq!(names(screen.missed_calls()), vec!["David Brown", "Sarah Miller"]);
    assert_eq!(screen.all_calls().len(), 8, "Deleting from Missed leaves All alone");
    assert!(names(screen.all_calls()).contains(&"Mom".to_string()));
}

#[test]
fn test_cancel_delete_keeps_lists() {
    let mut screen = CallsScreen::new();
    let all_before = screen.all_calls().to_vec();
    let missed_before = screen.missed_calls().to_vec();

    screen.request_delete(0);
    assert!(screen.cancel());

    assert!(!screen.is_modal());
    assert_eq!(screen.all_calls(), all_before.as_slice());
    assert_eq!(screen.missed_calls(), missed_before.as_slice());
    assert!(screen.notification.is_none(), "Cancel shows no notification");
}

#[test]
fn test_confirm_without_dialog() {
    let mut screen = CallsScreen::new();

    assert_eq!(screen.confirm(), None);
    assert!(!screen.cancel());
    assert_eq!(screen.all_calls().len(), 8);
}

#[test]
fn test_delete_shows_notification() {
    let mut screen = CallsScreen::new();

    screen.request_delete(0);
    screen.confirm();

    let notification = screen.notification.as_ref().expect("Delete should notify");
    assert_eq!(notification.message, "Call deleted");
}

#[test]
fn test_delete_selected_row() {
    let mut screen = CallsScreen::with_calls(small_history());

    screen.select_row(2);
    assert!(screen.request_delete_selected());
    screen.confirm();

    assert_eq!(names(screen.all_calls()), vec!["Alice", "Bob"]);
}

#[test]
fn test_delete_adjusts_selection() {
    let mut screen = CallsScreen::new();

    screen.select_row(7);
    screen.request_delete_selected();
    screen.confirm();

    assert_eq!(screen.selected_index(), 6, "Cursor moves onto the new last row");
}

#[test]
fn test_delete_last_row_empties_tab() {
    let mut screen = CallsScreen::with_calls(small_history());
    screen.select_tab(CallTab::Missed);

    screen.request_delete(0);
    screen.confirm();

    assert!(screen.current_calls().is_empty());
    assert_eq!(screen.selected_index(), 0);
    assert!(screen.selected_call().is_none());
    assert_eq!(screen.all_calls().len(), 3);
}
