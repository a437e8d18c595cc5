//! Terminal dashboard.
//!
//! Shows the dashboard summary, the jobs table and the projected calendar.
//! Tracing output is not installed while the dashboard runs, so nothing
//! writes over the alternate screen.

mod app;
mod error;
mod event;
pub mod form;
mod theme;
pub mod ui;

pub use app::{App, JobRow, Tab};
pub use error::TuiError;
pub use event::{AppEvent, EventLoop};
pub use form::{FormAction, FormField, FormTarget, JobForm};
pub use theme::Theme;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Take over the terminal and run the dashboard until the user quits.
pub async fn run(mut app: App, tick_rate: Duration) -> Result<(), TuiError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| TuiError::Terminal(e.to_string()))?;

    let mut events = EventLoop::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &mut events).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor().map_err(|e| TuiError::Terminal(e.to_string()))?;

    result
}

/// Run the main application loop.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventLoop,
) -> Result<(), TuiError> {
    loop {
        terminal
            .draw(|frame| ui::render(app, frame))
            .map_err(|e| TuiError::Terminal(e.to_string()))?;

        match events.next().await {
            Some(event) => app.handle_event(event).await,
            None => return Ok(()),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
