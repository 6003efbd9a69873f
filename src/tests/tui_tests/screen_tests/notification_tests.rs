//! Notification lifetime tests

use chrono::{Duration, Utc};
use crate::tui::{CallsScreen, Notification};

#[test]
fn test_notification_expiry() {
    let notification = Notification::new("Call deleted".to_string(), Duration::seconds(3));

    assert!(!notification.is_expired(notification.shown_at));
    assert!(!notification.is_expired(notification.shown_at + Duration::milliseconds(2_999)));
    assert!(notification.is_expired(notification.shown_at + Duration::seconds(3)));
}

#[test]
fn test_tick_clears_expired_notification() {
    let mut screen = CallsScreen::new();
    screen.call_back_selected();
    let shown_at = screen.notification.as_ref().expect("Should notify").shown_at;

    screen.tick(shown_at + Duration::seconds(1));
    assert!(screen.notification.is_some(), "Still visible after one second");

    screen.tick(shown_at + Duration::seconds(3));
    assert!(screen.notification.is_none(), "Gone after its lifetime");
}

#[test]
fn test_custom_notification_lifetime() {
    let mut screen = CallsScreen::new().with_notification_lifetime(Duration::milliseconds(500));
    screen.call_back_selected();

    let notification = screen.notification.clone().expect("Should notify");
    assert_eq!(notification.lifetime, Duration::milliseconds(500));

    screen.tick(notification.shown_at + Duration::milliseconds(500));
    assert!(screen.notification.is_none());
}

#[test]
fn test_tick_without_notification() {
    let mut screen = CallsScreen::new();
    screen.tick(Utc::now());
    assert!(screen.notification.is_none());
}

#[test]
fn test_new_notification_replaces_old() {
    let mut screen = CallsScreen::new();

    screen.call_back_selected();
    screen.request_delete(0);
    screen.confirm();

    assert_eq!(
        screen.notification.as_ref().map(|n| n.message.as_str()),
        Some("Call deleted")
    );
}
