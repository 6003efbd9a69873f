//! Theme and color definitions for the TUI
//!
//! The renderer never looks up the color scheme itself; it receives a
//! `Theme` built from the host's `ColorScheme`.

use crate::history::Call;
use crate::settings::ColorScheme;
use ratatui::style::Color;

/// Brand teal used for the active tab, outgoing calls and actions
pub const PRIMARY: Color = Color::Rgb(0x12, 0x8C, 0x7E);
/// Missed-call red
pub const MISSED: Color = Color::Rgb(0xEF, 0x44, 0x44);

/// TUI color theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Scheme this theme was built for
    pub scheme: ColorScheme,
    /// Screen background
    pub bg: Color,
    /// Segmented control / popup background
    pub surface: Color,
    /// Highlighted row background
    pub selection: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (times, incoming calls)
    pub muted: Color,
    /// Borders and separators
    pub border: Color,
    /// Empty-state icon
    pub empty_icon: Color,
    /// Accent color
    pub primary: Color,
    /// Missed calls and destructive actions
    pub missed: Color,
    /// Text drawn on the accent color
    pub on_primary: Color,
}

impl Theme {
    /// Build the palette for `scheme`
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                scheme,
                bg: Color::Rgb(0x11, 0x21, 0x1F),
                surface: Color::Rgb(0x1A, 0x2C, 0x2A),
                selection: Color::Rgb(0x2D, 0x37, 0x48),
                text: Color::White,
                muted: Color::Rgb(0x9C, 0xA3, 0xAF),
                border: Color::Rgb(0x37, 0x41, 0x51),
                empty_icon: Color::Rgb(0x4B, 0x55, 0x63),
                primary: PRIMARY,
                missed: MISSED,
                on_primary: Color::White,
            },
            ColorScheme::Light => Self {
                scheme,
                bg: Color::White,
                surface: Color::Rgb(0xF3, 0xF4, 0xF6),
                selection: Color::Rgb(0xF3, 0xF4, 0xF6),
                text: Color::Rgb(0x11, 0x17, 0x17),
                muted: Color::Rgb(0x6B, 0x72, 0x80),
                border: Color::Rgb(0xE5, 0xE7, 0xEB),
                empty_icon: Color::Rgb(0xD1, 0xD5, 0xDB),
                primary: PRIMARY,
                missed: MISSED,
                on_primary: Color::White,
            },
        }
    }

    /// Color of a call's direction indicator and duration
    pub fn call_color(&self, call: &Call) -> Color {
        if call.is_missed() {
            self.missed
        } else if call.is_outgoing() {
            self.primary
        } else {
            self.muted
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_scheme(ColorScheme::default())
    }
}
