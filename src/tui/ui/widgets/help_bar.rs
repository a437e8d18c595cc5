//! Help bar widget showing keybindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::Theme;

const HINTS: [(&str, &str); 8] = [
    ("q", "Quit"),
    ("Tab", "Switch"),
    ("j/k", "Navigate"),
    ("n", "New job"),
    ("e", "Edit job"),
    ("d", "Delete job"),
    ("r", "Reload"),
    ("?", "Help"),
];

/// Render the help bar.
pub fn render(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{}: {}", key, action), Theme::text_dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Theme::header());
    frame.render_widget(paragraph, area);
}
