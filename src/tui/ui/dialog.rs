//! Confirmation popup rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use crate::history::Call;
use crate::tui::theme::Theme;
use crate::tui::types::PendingConfirmation;
use super::helpers::centered_rect;

/// Draw the modal dialog for `pending` over `area`
///
/// `target` is the record a delete dialog points at, shown under the question.
pub fn render_confirmation_popup(
    f: &mut Frame,
    area: Rect,
    pending: PendingConfirmation,
    target: Option<&Call>,
    theme: &Theme,
) {
    let popup_area = centered_rect(60, 10, area);

    f.render_widget(Clear, popup_area);
    let background = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.missed))
        .style(Style::default().bg(theme.surface));
    f.render_widget(background, popup_area);

    let popup_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(3),    // Message
            Constraint::Length(1), // Buttons
        ])
        .split(popup_area);

    let title = Paragraph::new(pending.title().to_string())
        .style(
            Style::default()
                .fg(theme.missed)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, popup_chunks[0]);

    let mut message_text = vec![Line::from(Span::styled(
        pending.message().to_string(),
        Style::default().fg(theme.text),
    ))];
    if let Some(call) = target {
        message_text.push(Line::from(""));
        message_text.push(Line::from(vec![
            Span::styled(call.name().to_string(), Style::default().fg(theme.primary)),
            Span::styled(
                format!(" · {} · {}", call.call_type().label(), call.time()),
                Style::default().fg(theme.muted),
            ),
        ]));
    }
    let message = Paragraph::new(message_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(message, popup_chunks[1]);

    let buttons = Paragraph::new(Line::from(vec![
        Span::styled("[N] ", Style::default().fg(theme.muted).add_modifier(Modifier::BOLD)),
        Span::styled(pending.cancel_label().to_string(), Style::default().fg(theme.text)),
        Span::raw("    "),
        Span::styled("[Y] ", Style::default().fg(theme.missed).add_modifier(Modifier::BOLD)),
        Span::styled(
            pending.confirm_label().to_string(),
            Style::default().fg(theme.missed).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(buttons, popup_chunks[2]);
}
