//! Tab bar widget for navigation.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, Tab};
use crate::tui::theme::Theme;

/// Render the tab bar.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    for (i, tab) in Tab::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Theme::text_dim()));
        }

        let active = *tab == app.current_tab;
        let style = if active {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };

        spans.push(Span::styled(if active { "[" } else { " " }, style));
        spans.push(Span::styled(tab.name(), style));
        spans.push(Span::styled(if active { "]" } else { " " }, style));
    }

    // Context for the list tabs
    let context = match app.current_tab {
        Tab::Jobs => app.selected_job().map(|row| format!("Job: {}", row.job.id())),
        Tab::Calendar => app
            .selected_occurrence()
            .map(|o| format!("Job: {} ({})", o.job_id, o.title)),
        Tab::Dashboard => None,
    };
    if let Some(context) = context {
        spans.push(Span::styled(" │ ", Theme::text_dim()));
        spans.push(Span::styled(context, Theme::text_dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
