//! Job form overlay.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::form::{FormField, JobForm};
use crate::tui::theme::Theme;

use super::help_overlay::centered_rect;

/// Render the form over the current tab.
pub fn render(form: &JobForm, frame: &mut Frame, area: Rect) {
    let overlay_area = centered_rect(70, 70, area);
    frame.render_widget(Clear, overlay_area);

    let mut lines = vec![Line::from("")];
    for field in FormField::all() {
        let focused = *field == form.focus;
        let value = form.value(*field);
        let shown = match (field.is_choice(), focused) {
            (true, true) => format!("< {} >", value),
            (true, false) => value.to_string(),
            (false, true) => format!("{}_", value),
            (false, false) => value.to_string(),
        };

        let label_style = if focused { Theme::tab_active() } else { Theme::text_dim() };
        let value_style = if focused { Theme::selected() } else { Theme::text() };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:14}", field.label()), label_style),
            Span::styled(shown, value_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Schedule At: 2024-01-31 09:00 or RFC 3339. Blank cron repeats daily at that time.",
        Theme::text_dim(),
    )));
    lines.push(Line::from(Span::styled(
        "  Headers: Key: Value; Other: Value",
        Theme::text_dim(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Enter save  Esc cancel  Tab/Up/Down move  Left/Right change",
        Theme::text_dim(),
    )));

    let block = Block::default()
        .title(format!(" {} ", form.title()))
        .borders(Borders::ALL)
        .style(Theme::border());

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, overlay_area);
}
