//! Shared test helpers for screen tests

use crate::history::{Call, CallType};

/// Names of `calls`, in order
pub fn names(calls: &[Call]) -> Vec<String> {
    calls.iter().map(|c| c.name().to_string()).collect()
}

/// A small history: two answered calls around one missed call
pub fn small_history() -> Vec<Call> {
    vec![
        Call::new("Alice", "9:00 AM", "Today", false, true, CallType::Voice, "1:00"),
        Call::new("Bob", "8:00 AM", "Today", true, false, CallType::Voice, "Missed"),
        Call::new("Carol", "7:00 AM", "Today", false, false, CallType::Video, "3:10"),
    ]
}
