//! Main TUI application state and logic

use chrono::Utc;
use crate::settings::Settings;
use crate::tui::screens::CallsScreen;
use crate::tui::theme::Theme;

/// Application state
pub struct App {
    /// The Calls screen
    pub screen: CallsScreen,
    /// Loaded settings
    pub settings: Settings,
    /// Should quit
    pub should_quit: bool,
    theme: Theme,
}

impl App {
    /// Create new application from settings
    pub fn new(settings: Settings) -> Self {
        let screen = CallsScreen::new().with_notification_lifetime(settings.notification_lifetime());
        let theme = Theme::for_scheme(settings.color_scheme);

        Self {
            screen,
            settings,
            should_quit: false,
            theme,
        }
    }

    /// Theme handed to the renderer
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch between light and dark
    pub fn toggle_color_scheme(&mut self) {
        self.settings.color_scheme = self.settings.color_scheme.toggled();
        self.theme = Theme::for_scheme(self.settings.color_scheme);
        tracing::debug!("Color scheme set to {:?}", self.settings.color_scheme);
    }

    /// Periodic housekeeping between input events
    pub fn tick(&mut self) {
        self.screen.tick(Utc::now());
    }

    /// Request exit from the event loop
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
