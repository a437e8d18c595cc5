//! Jobs tab renderer.

use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::core::projector::JobStatus;
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render the jobs tab.
pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .jobs
        .iter()
        .map(|row| {
            let job = &row.job;

            let status_icon = match row.status {
                JobStatus::Active => "●",
                JobStatus::Pending => "◐",
                JobStatus::Unknown => "○",
            };
            let status_style = Theme::job_status(row.status);

            let request = job
                .request()
                .map(|r| r.summary())
                .unwrap_or_else(|| "-".to_string());

            let spans = vec![
                Span::styled(format!("{} ", status_icon), status_style),
                Span::styled(format!("{:<8}", row.status), status_style),
                Span::styled(format!(" {:<24}", job.title()), Theme::text()),
                Span::styled(format!(" {:<20}", job.schedule_label()), Theme::text_dim()),
                Span::styled(format!(" {:<16}", job.zone_id()), Theme::text_dim()),
                Span::styled(format!(" {}", request), Theme::text_dim()),
            ];

            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" Jobs ({}) ", app.jobs.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Theme::border()),
        )
        .highlight_style(Theme::selected().add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.jobs_list_state);
}
