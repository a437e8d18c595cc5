//! Main layout rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::tui::app::{App, Tab};

use super::tabs;
use super::widgets::{help_bar, help_overlay, job_form, status_bar, tab_bar};

/// Render the entire application.
pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    status_bar::render(app, frame, chunks[0]);
    tab_bar::render(app, frame, chunks[1]);
    render_tab_content(app, frame, chunks[2]);
    help_bar::render(frame, chunks[3]);

    if let Some(form) = &app.form {
        job_form::render(form, frame, frame.area());
    }

    if app.show_help {
        help_overlay::render(frame, frame.area());
    }
}

/// Render the content for the current tab.
fn render_tab_content(app: &mut App, frame: &mut Frame, area: Rect) {
    match app.current_tab {
        Tab::Dashboard => tabs::dashboard::render(app, frame, area),
        Tab::Jobs => tabs::jobs::render(app, frame, area),
        Tab::Calendar => tabs::calendar::render(app, frame, area),
    }
}
