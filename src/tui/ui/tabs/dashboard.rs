//! Dashboard tab renderer: profile, metric cards and the weekly chart.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
};

use crate::fixtures::{DashboardData, format_count};
use crate::tui::app::App;
use crate::tui::theme::Theme;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Render the dashboard tab.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(data) = app.dashboard.as_ref() else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No dashboard data. Press r to retry loading data.json.",
            Theme::text_dim(),
        )))
        .block(Block::default().borders(Borders::ALL).style(Theme::border()));
        frame.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Profile and menu
            Constraint::Length(4), // Metric cards
            Constraint::Min(0),    // Weekly chart
        ])
        .split(area);

    render_profile(data, frame, chunks[0]);
    render_cards(data, frame, chunks[1]);
    render_weekly(data, frame, chunks[2]);
}

fn render_profile(data: &DashboardData, frame: &mut Frame, area: Rect) {
    let menu = data
        .menu
        .iter()
        .map(|item| item.title.as_str())
        .collect::<Vec<_>>()
        .join(" · ");

    let line = Line::from(vec![
        Span::styled(data.profile.name.clone(), Theme::accent()),
        Span::styled(format!(" ({})", data.profile.role), Theme::text_dim()),
        Span::raw("  │  "),
        Span::styled(menu, Theme::text()),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Profile ")
            .borders(Borders::ALL)
            .style(Theme::border()),
    );
    frame.render_widget(paragraph, area);
}

fn render_cards(data: &DashboardData, frame: &mut Frame, area: Rect) {
    let metrics = data.metrics();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = [
        ("Total Transactions", metrics.total, None, Theme::text()),
        (
            "Failed Transactions",
            metrics.failed,
            Some(metrics.failure_rate),
            Theme::failure(),
        ),
        (
            "Successful Transactions",
            metrics.successful,
            Some(metrics.success_rate),
            Theme::success(),
        ),
    ];

    for ((title, count, rate, style), column) in cards.into_iter().zip(columns.iter()) {
        frame.render_widget(card(title, count, rate, style), *column);
    }
}

fn card(title: &'static str, count: u64, rate: Option<f64>, style: Style) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(format_count(count), style)];
    if let Some(rate) = rate {
        spans.push(Span::styled(format!("  {:.2}%", rate), Theme::text_dim()));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .style(Theme::border()),
    )
}

fn render_weekly(data: &DashboardData, frame: &mut Frame, area: Rect) {
    let weekly = &data.transactions.weekly;
    let labels: Vec<String> = (0..weekly.len())
        .map(|i| match (weekly.len(), WEEKDAYS.get(i)) {
            (7, Some(day)) => day.to_string(),
            _ => format!("D{}", i + 1),
        })
        .collect();
    let bars: Vec<(&str, u64)> = labels
        .iter()
        .map(String::as_str)
        .zip(weekly.iter().copied())
        .collect();

    let metrics = data.metrics();
    let title = format!(
        " Weekly ({} total, peak {}) ",
        format_count(metrics.weekly_total),
        format_count(metrics.weekly_peak)
    );

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Theme::border()),
        )
        .data(bars.as_slice())
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Theme::accent())
        .value_style(Theme::header());

    frame.render_widget(chart, area);
}
