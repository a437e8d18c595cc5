//! Status bar widget showing board counts and messages.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::core::projector::OccurrenceStatus;
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render the status bar.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let active = app
        .calendar
        .iter()
        .filter(|o| o.status == OccurrenceStatus::Active)
        .count();
    let pending = app.calendar.len() - active;

    let mut spans = vec![
        Span::styled(
            " cronboard ",
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(format!("Jobs: {}", app.jobs.len()), Theme::text()),
        Span::raw(" │ "),
        Span::styled(format!("Active: {}", active), Style::default().fg(Theme::ACTIVE)),
        Span::raw(" "),
        Span::styled(format!("Pending: {}", pending), Style::default().fg(Theme::PENDING)),
    ];

    if app.refreshing {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("⟳", Style::default().fg(Theme::ACCENT)));
    }

    if let Some(ref error) = app.error_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Error: {}", truncate(error, 40)),
            Theme::failure(),
        ));
    } else if let Some(ref status) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(truncate(status, 40), Theme::text_dim()));
    }

    let now = chrono::Local::now();
    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(now.format("%H:%M:%S").to_string(), Theme::text_dim()));

    let paragraph = Paragraph::new(Line::from(spans)).style(Theme::header());
    frame.render_widget(paragraph, area);
}

/// Truncate a string to at most `max_chars` characters.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
