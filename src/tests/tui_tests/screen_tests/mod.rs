//! CallsScreen tests
//!
//! Organised by feature area:
//! - `helpers` - Shared test utilities
//! - `initialization_tests` - Seed loading, missed subset
//! - `tab_tests` - Tab switching and the missed indicator
//! - `delete_tests` - Single-row delete confirmation flow
//! - `clear_missed_tests` - Clear-all-missed flow
//! - `navigation_tests` - Row cursor, call back, modal blocking
//! - `notification_tests` - Notification lifetime

mod helpers;
mod delete_tests;
mod clear_missed_tests;
mod notification_tests;
