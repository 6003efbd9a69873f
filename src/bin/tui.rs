//! Chatify Calls TUI (Terminal User Interface)
//!
//! A terminal front-end for the Calls screen.
//!
//! Usage: `chatify-calls-tui [settings.json]`

use chatify_calls::settings::Settings;
use chatify_calls::tui::{ui::ui, App, CallTab};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

const DEFAULT_SETTINGS_PATH: &str = "calls_settings.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings = Settings::load(&settings_path)?;
    chatify_calls::init_logging(&settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Event loop failed: {}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    let tick_rate = app.settings.tick_rate();

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Modal dialog: only confirm / cancel
                if app.screen.is_modal() {
                    match key.code {
                        KeyCode::Char('y') | KeyCode::Enter => {
                            app.screen.confirm();
                        }
                        KeyCode::Char('n') | KeyCode::Esc => {
                            app.screen.cancel();
                        }
                        _ => {}
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.quit();
                    }
                    KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                        app.screen.toggle_tab();
                    }
                    KeyCode::Char('1') => {
                        app.screen.select_tab(CallTab::All);
                    }
                    KeyCode::Char('2') => {
                        app.screen.select_tab(CallTab::Missed);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        app.screen.next();
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        app.screen.previous();
                    }
                    KeyCode::Enter => {
                        app.screen.call_back_selected();
                    }
                    KeyCode::Char('c') => {
                        app.screen.call_back_selected_missed();
                    }
                    KeyCode::Char('d') | KeyCode::Delete => {
                        app.screen.request_delete_selected();
                    }
                    KeyCode::Char('x') if app.screen.selected_tab() == CallTab::Missed => {
                        app.screen.request_clear_all_missed();
                    }
                    KeyCode::Char('n') => {
                        app.screen.new_call();
                    }
                    KeyCode::Char('t') => {
                        app.toggle_color_scheme();
                    }
                    _ => {}
                }
            }
        }

        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}
