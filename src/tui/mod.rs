//! TUI (Terminal User Interface) module
//!
//! Screen state lives apart from rendering and from the binary so the whole
//! interaction flow can be driven from tests without a terminal.

pub mod types;
pub mod screens;
pub mod app;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use types::{CallTab, ConfirmOutcome, PendingConfirmation};
pub use screens::{CallsScreen, Notification};
pub use app::App;
pub use theme::Theme;
