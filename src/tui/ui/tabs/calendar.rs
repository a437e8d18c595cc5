//! Calendar tab renderer.
//!
//! Occurrences are listed by start time with a day label on the first
//! entry of each day, next to a detail pane for the selection.

use chrono::{Local, NaiveDate};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::core::projector::OccurrenceSource;
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render the calendar tab.
pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_list(app, frame, chunks[0]);
    render_detail(app, frame, chunks[1]);
}

fn render_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let now = app.now();
    let mut previous_day: Option<NaiveDate> = None;

    let items: Vec<ListItem> = app
        .calendar
        .iter()
        .map(|occurrence| {
            let local = occurrence.start.with_timezone(&Local);
            let day = local.date_naive();
            let day_label = if previous_day == Some(day) {
                String::new()
            } else {
                local.format("%a %d %b").to_string()
            };
            previous_day = Some(day);

            let kind = match occurrence.source {
                OccurrenceSource::Cron { .. } => "cron",
                OccurrenceSource::ScheduleAt => "once",
            };

            let spans = vec![
                Span::styled(format!("{:<11}", day_label), Theme::accent()),
                Span::styled(local.format("%H:%M").to_string(), Theme::text()),
                Span::styled(
                    format!(" {:<8}", occurrence.status),
                    Theme::occurrence_status(occurrence.status),
                ),
                Span::styled(format!(" {:<24}", occurrence.title), Theme::text()),
                Span::styled(format!(" {:<5}", kind), Theme::text_dim()),
                Span::styled(
                    format!(" {}", App::format_relative(occurrence.start, now)),
                    Theme::text_dim(),
                ),
            ];

            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" Calendar ({}) ", app.calendar.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Theme::border()),
        )
        .highlight_style(Theme::selected().add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.calendar_list_state);
}

fn render_detail(app: &App, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = match app.selected_tooltip() {
        Some(text) => text
            .lines()
            .map(|line| match line.split_once(": ") {
                Some((label, value)) => Line::from(vec![
                    Span::styled(format!("{}: ", label), Theme::text_dim()),
                    Span::styled(value.to_string(), Theme::text()),
                ]),
                None => Line::from(line.to_string()),
            })
            .collect(),
        None => vec![Line::from(Span::styled("No occurrence selected", Theme::text_dim()))],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .style(Theme::border()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
