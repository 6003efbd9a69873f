//! Calls screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use crate::history::Call;
use crate::tui::screens::CallsScreen;
use crate::tui::theme::Theme;
use crate::tui::types::{CallTab, PendingConfirmation};
use super::dialog::render_confirmation_popup;
use super::helpers::{call_indicator, duration_label, truncate_with_ellipsis};

const HIGHLIGHT_SYMBOL: &str = "→ ";
const CALL_BACK_LABEL: &str = "[☎ Call back]";

/// Renders the screen
pub fn render_calls(f: &mut Frame, screen: &CallsScreen, theme: &Theme) {
    let size = f.size();

    let background = Block::default().style(Style::default().bg(theme.bg).fg(theme.text));
    f.render_widget(background, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Segmented control
            Constraint::Min(5),    // Call list
            Constraint::Length(3), // Notification
            Constraint::Length(3), // Actions / help
        ])
        .split(size);

    render_tabs(f, chunks[0], screen, theme);

    if screen.current_calls().is_empty() {
        render_empty_state(f, chunks[1], screen, theme);
    } else {
        render_call_list(f, chunks[1], screen, theme);
    }

    render_notification(f, chunks[2], screen, theme);
    render_action_bar(f, chunks[3], screen, theme);

    if let Some(pending) = screen.pending() {
        let target = match pending {
            PendingConfirmation::DeleteCall { index, tab } => match tab {
                CallTab::All => screen.all_calls().get(index),
                CallTab::Missed => screen.missed_calls().get(index),
            },
            PendingConfirmation::ClearAllMissed => None,
        };
        render_confirmation_popup(f, size, pending, target, theme);
    }
}

fn render_tabs(f: &mut Frame, area: Rect, screen: &CallsScreen, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (tab, half) in CallTab::all().into_iter().zip(halves.iter()) {
        let active = screen.selected_tab() == tab;
        let style = if active {
            Style::default()
                .bg(theme.primary)
                .fg(theme.on_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        };

        let mut spans = vec![Span::raw(tab.label().to_string())];
        if tab == CallTab::Missed && screen.show_missed_indicator() {
            spans.push(Span::styled(" ●", Style::default().fg(theme.missed)));
        }

        let label = Paragraph::new(Line::from(spans))
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(label, *half);
    }
}

fn render_call_list(f: &mut Frame, area: Rect, screen: &CallsScreen, theme: &Theme) {
    let content_width = (area.width as usize)
        .saturating_sub(2)
        .saturating_sub(HIGHLIGHT_SYMBOL.chars().count());

    let items: Vec<ListItem> = screen
        .current_calls()
        .iter()
        .map(|call| ListItem::new(call_row(call, content_width, theme)))
        .collect();

    let title = format!(
        "{} ({})",
        screen.selected_tab().label(),
        screen.current_calls().len()
    );
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(title),
        )
        .highlight_style(Style::default().bg(theme.selection))
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default();
    state.select(Some(screen.selected_index()));
    f.render_stateful_widget(list, area, &mut state);
}

/// Two display lines for one call: avatar, name and time on top; type,
/// duration, badge and call-back action below.
pub fn call_row(call: &Call, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let call_color = theme.call_color(call);

    let avatar = format!("({}) ", call.avatar_label());
    let avatar_width = avatar.chars().count();
    let time_width = call.time().chars().count();
    let name_width = width.saturating_sub(avatar_width + time_width + 1);
    let name = truncate_with_ellipsis(call.name(), name_width);
    let padding = width.saturating_sub(avatar_width + name.chars().count() + time_width);

    let top = Line::from(vec![
        Span::styled(avatar, Style::default().fg(call_color).add_modifier(Modifier::BOLD)),
        Span::styled(name, Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
        Span::styled(call.time().to_string(), Style::default().fg(theme.muted)),
    ]);

    let mut bottom = vec![Span::raw(" ".repeat(avatar_width))];
    if call.is_missed() {
        bottom.push(Span::styled(
            duration_label(call).to_string(),
            Style::default().fg(theme.missed).add_modifier(Modifier::BOLD),
        ));
    } else {
        bottom.push(Span::styled(call_indicator(call), Style::default().fg(call_color)));
        bottom.push(Span::raw(" "));
        bottom.push(Span::styled(
            duration_label(call).to_string(),
            Style::default().fg(call_color),
        ));
    }
    if call.is_group() {
        bottom.push(Span::raw("  "));
        bottom.push(Span::styled(
            " Group ",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ));
    }
    if call.is_missed() {
        bottom.push(Span::raw("  "));
        bottom.push(Span::styled(
            CALL_BACK_LABEL,
            Style::default().fg(theme.on_primary).bg(theme.primary),
        ));
    }

    vec![top, Line::from(bottom)]
}

fn render_empty_state(f: &mut Frame, area: Rect, screen: &CallsScreen, theme: &Theme) {
    let tab = screen.selected_tab();
    let icon = match tab {
        CallTab::All => "☎",
        CallTab::Missed => "✆",
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            icon,
            Style::default().fg(theme.empty_icon).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            tab.empty_title().to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            tab.empty_subtitle().to_string(),
            Style::default().fg(theme.muted),
        )),
    ];

    if tab == CallTab::Missed && !screen.all_calls().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "[ Clear All Missed Calls ]",
                Style::default().fg(theme.on_primary).bg(theme.primary),
            ),
            Span::styled(" (x)", Style::default().fg(theme.muted)),
        ]));
    }

    let empty = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(tab.label().to_string()),
    );
    f.render_widget(empty, area);
}

fn render_notification(f: &mut Frame, area: Rect, screen: &CallsScreen, theme: &Theme) {
    let text = screen
        .notification
        .as_ref()
        .map(|n| n.message.as_str())
        .unwrap_or("");
    let status = Paragraph::new(text.to_string())
        .style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title("Status"),
        );
    f.render_widget(status, area);
}

fn render_action_bar(f: &mut Frame, area: Rect, screen: &CallsScreen, theme: &Theme) {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(area);

    let help_text = match screen.selected_tab() {
        CallTab::All => "Tab: Switch | ↑↓/j/k: Move | Enter: Call | d: Delete | t: Theme | q: Quit",
        CallTab::Missed => {
            "Tab: Switch | ↑↓/j/k: Move | Enter/c: Call back | d: Delete | x: Clear missed | q: Quit"
        }
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(theme.muted))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(help, parts[0]);

    let fab = Paragraph::new("+ New call (n)")
        .style(
            Style::default()
                .fg(theme.on_primary)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(fab, parts[1]);
}
