//! UI helper functions

use crate::history::{Call, CallType};
use ratatui::layout::Rect;

/// Shorten `text` to `max_width` characters, ending with "…" when cut
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    let count = text.chars().count();
    if count <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(max_width - 1).collect();
    truncated.push('…');
    truncated
}

/// Symbol for the call type and direction
pub fn call_indicator(call: &Call) -> &'static str {
    match call.call_type() {
        CallType::Voice if call.is_outgoing() => "↗",
        CallType::Voice => "↙",
        CallType::Video => "▶",
        CallType::Group => "⚇",
    }
}

/// Text shown in the duration slot; missed calls always read "Missed"
pub fn duration_label(call: &Call) -> &str {
    if call.is_missed() {
        "Missed"
    } else {
        call.duration()
    }
}

/// Rectangle of `width` x `height` centered in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
