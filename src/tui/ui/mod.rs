//! UI rendering module
//!
//! Rendering is a pure function of the screen state and the theme; nothing
//! here mutates the app.

mod calls;
mod dialog;
mod helpers;

use ratatui::Frame;
use crate::tui::app::App;

// Re-export render functions
pub use calls::{call_row, render_calls};
pub use dialog::render_confirmation_popup;

// Re-export helper functions
pub use helpers::{call_indicator, centered_rect, duration_label, truncate_with_ellipsis};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    render_calls(f, &app.screen, app.theme());
}
