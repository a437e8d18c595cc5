//! Application state and business logic for the TUI.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use std::time::Instant;

use crate::board::{Board, Reconciled};
use crate::core::job::Job;
use crate::core::projector::{JobStatus, Occurrence, job_status};
use crate::fixtures::{DashboardData, FixtureLoader};

use super::event::AppEvent;
use super::form::{FormAction, FormTarget, JobForm};

/// The currently selected tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Jobs,
    Calendar,
}

impl Tab {
    /// Get all tabs in order.
    pub fn all() -> &'static [Tab] {
        &[Tab::Dashboard, Tab::Jobs, Tab::Calendar]
    }

    /// Get the display name for this tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Jobs => "Jobs",
            Tab::Calendar => "Calendar",
        }
    }

    /// Move to the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Dashboard => Tab::Jobs,
            Tab::Jobs => Tab::Calendar,
            Tab::Calendar => Tab::Dashboard,
        }
    }

    /// Move to the previous tab.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::Dashboard => Tab::Calendar,
            Tab::Jobs => Tab::Dashboard,
            Tab::Calendar => Tab::Jobs,
        }
    }
}

/// A row of the jobs table.
#[derive(Debug, Clone)]
pub struct JobRow {
    pub job: Job,
    pub status: JobStatus,
}

/// Main application state.
pub struct App {
    board: Board,
    loader: FixtureLoader,

    /// Current tab.
    pub current_tab: Tab,

    /// Dashboard summary, `None` when `data.json` failed to load.
    pub dashboard: Option<DashboardData>,

    /// Jobs with their table status.
    pub jobs: Vec<JobRow>,

    /// Occurrences sorted by start time.
    pub calendar: Vec<Occurrence>,

    /// List state for jobs tab.
    pub jobs_list_state: ListState,

    /// List state for calendar tab.
    pub calendar_list_state: ListState,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Current error message to display.
    pub error_message: Option<String>,

    /// Outcome of the last user action.
    pub status_message: Option<String>,

    /// Time of last projection.
    pub last_refresh: Instant,

    /// Whether a reload is in progress.
    pub refreshing: bool,

    /// Show help overlay.
    pub show_help: bool,

    /// Open job form, if any.
    pub form: Option<JobForm>,
}

impl App {
    /// Create the application and load fixtures.
    pub async fn new(board: Board, loader: FixtureLoader) -> Self {
        let mut app = Self {
            board,
            loader,
            current_tab: Tab::Dashboard,
            dashboard: None,
            jobs: Vec::new(),
            calendar: Vec::new(),
            jobs_list_state: ListState::default(),
            calendar_list_state: ListState::default(),
            should_quit: false,
            error_message: None,
            status_message: None,
            last_refresh: Instant::now(),
            refreshing: false,
            show_help: false,
            form: None,
        };

        app.reload().await;
        app
    }

    /// Reload both fixtures, discarding local edits.
    pub async fn reload(&mut self) {
        self.refreshing = true;
        self.error_message = None;

        self.dashboard = self.loader.load_dashboard().await;
        if self.dashboard.is_none() {
            self.error_message = Some("Failed to load data.json".to_string());
        }

        match self.board.reload_from(&self.loader).await {
            Ok(count) => {
                self.status_message = Some(format!("Loaded {} jobs from {}", count, self.loader.source()));
            }
            Err(e) => {
                self.error_message = Some(format!("Load error: {}", e));
            }
        }

        self.sync().await;
        self.refreshing = false;
    }

    /// Dispatch an event from the event loop.
    ///
    /// Ticks and resizes only trigger a redraw; statuses are recomputed on
    /// reload and on edits.
    pub async fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key).await,
            AppEvent::Tick | AppEvent::Resize => {}
        }
    }

    /// Copy board state into the view lists, keeping selections in range.
    async fn sync(&mut self) {
        let now = self.board.projector().now();

        match self.board.jobs().await {
            Ok(jobs) => {
                self.jobs = jobs
                    .into_iter()
                    .map(|job| {
                        let status = job_status(&job, now);
                        JobRow { job, status }
                    })
                    .collect();
            }
            Err(e) => {
                self.error_message = Some(format!("Jobs error: {}", e));
            }
        }

        let mut calendar = self.board.occurrences().to_vec();
        calendar.sort_by_key(|o| o.start);
        self.calendar = calendar;

        clamp_selection(&mut self.jobs_list_state, self.jobs.len());
        clamp_selection(&mut self.calendar_list_state, self.calendar.len());
        self.last_refresh = Instant::now();
    }

    /// Handle a key event.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        // Close help overlay first
        if self.show_help {
            self.show_help = false;
            return;
        }

        // The form takes every key while open
        if let Some(form) = self.form.as_mut() {
            match form.handle_key(key) {
                FormAction::Continue => {}
                FormAction::Cancel => self.form = None,
                FormAction::Submit => self.submit_form().await,
            }
            return;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }

            // Tab navigation
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.current_tab = self.current_tab.prev();
                } else {
                    self.current_tab = self.current_tab.next();
                }
            }
            KeyCode::BackTab => {
                self.current_tab = self.current_tab.prev();
            }

            // List navigation
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
            }
            KeyCode::Char('g') => {
                self.select_first();
            }
            KeyCode::Char('G') => {
                self.select_last();
            }

            // Reload from fixtures
            KeyCode::Char('r') => {
                self.reload().await;
            }

            // Create and edit jobs
            KeyCode::Char('n') => {
                self.form = Some(JobForm::create());
            }
            KeyCode::Char('e') => {
                self.open_edit_form();
            }

            // Delete the selected occurrence's job
            KeyCode::Char('d') => {
                self.delete_selected().await;
            }

            // Help
            KeyCode::Char('?') => {
                self.show_help = true;
            }

            _ => {}
        }
    }

    /// Open the form for the selected job or occurrence.
    fn open_edit_form(&mut self) {
        let target = match self.current_tab {
            Tab::Jobs => self
                .selected_job()
                .map(|row| (FormTarget::Job(row.job.id().clone()), row.job.id().clone())),
            Tab::Calendar => self
                .selected_occurrence()
                .map(|o| (FormTarget::Occurrence(o.id.clone()), o.job_id.clone())),
            Tab::Dashboard => {
                self.status_message = Some("Select a job or an occurrence to edit".to_string());
                return;
            }
        };
        let Some((target, job_id)) = target else {
            return;
        };

        match self.jobs.iter().find(|row| row.job.id() == &job_id) {
            Some(row) => self.form = Some(JobForm::edit(target, &row.job)),
            None => self.error_message = Some(format!("Job {} is no longer on the board", job_id)),
        }
    }

    /// Apply the open form to the board.
    ///
    /// An invalid draft keeps the form open with the error shown.
    async fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };

        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.error_message = Some(format!("Invalid job: {}", e));
                self.form = Some(form);
                return;
            }
        };

        let result = match &form.target {
            FormTarget::Create => self.board.update_by_occurrence(None, draft).await,
            FormTarget::Occurrence(id) => self.board.update_by_occurrence(Some(id), draft).await,
            FormTarget::Job(id) => self.board.update_job(id, draft).await,
        };

        match result {
            Ok(Reconciled::Updated { job_id, occurrences }) => {
                self.error_message = None;
                self.status_message = Some(format!("Updated job {} ({} occurrences)", job_id, occurrences));
            }
            Ok(Reconciled::Inserted { job_id, .. }) => {
                self.error_message = None;
                self.status_message = Some(format!("Created job {}", job_id));
            }
            Err(e) => {
                self.error_message = Some(format!("Save error: {}", e));
            }
        }
        self.sync().await;
    }

    async fn delete_selected(&mut self) {
        if self.current_tab != Tab::Calendar {
            self.status_message = Some("Select an occurrence on the Calendar tab to delete".to_string());
            return;
        }

        let Some(target) = self.selected_occurrence().map(|o| o.id.clone()) else {
            return;
        };

        match self.board.delete_by_occurrence(&target).await {
            Ok(removed) => {
                self.status_message = Some(format!("Deleted {} occurrences", removed));
            }
            Err(e) => {
                self.error_message = Some(format!("Delete error: {}", e));
            }
        }
        self.sync().await;
    }

    /// Select next item in current list.
    fn select_next(&mut self) {
        let Some((list_state, len)) = self.current_list_state() else {
            return;
        };
        if len == 0 {
            return;
        }
        let i = match list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        list_state.select(Some(i));
    }

    /// Select previous item in current list.
    fn select_prev(&mut self) {
        let Some((list_state, len)) = self.current_list_state() else {
            return;
        };
        if len == 0 {
            return;
        }
        let i = match list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        list_state.select(Some(i));
    }

    /// Select first item in current list.
    fn select_first(&mut self) {
        if let Some((list_state, len)) = self.current_list_state()
            && len > 0
        {
            list_state.select(Some(0));
        }
    }

    /// Select last item in current list.
    fn select_last(&mut self) {
        if let Some((list_state, len)) = self.current_list_state()
            && len > 0
        {
            list_state.select(Some(len - 1));
        }
    }

    /// Get the current list state and length; the dashboard has no list.
    fn current_list_state(&mut self) -> Option<(&mut ListState, usize)> {
        match self.current_tab {
            Tab::Dashboard => None,
            Tab::Jobs => Some((&mut self.jobs_list_state, self.jobs.len())),
            Tab::Calendar => Some((&mut self.calendar_list_state, self.calendar.len())),
        }
    }

    /// Get the selected job row.
    pub fn selected_job(&self) -> Option<&JobRow> {
        self.jobs_list_state
            .selected()
            .and_then(|i| self.jobs.get(i))
    }

    /// Get the selected occurrence.
    pub fn selected_occurrence(&self) -> Option<&Occurrence> {
        self.calendar_list_state
            .selected()
            .and_then(|i| self.calendar.get(i))
    }

    /// Detail text for the selected occurrence.
    pub fn selected_tooltip(&self) -> Option<String> {
        let occurrence = self.selected_occurrence()?;
        let job = self
            .jobs
            .iter()
            .find(|row| row.job.id() == &occurrence.job_id)
            .map(|row| &row.job);
        Some(occurrence.tooltip(job))
    }

    /// The board clock's current instant.
    pub fn now(&self) -> DateTime<Utc> {
        self.board.projector().now()
    }

    /// Format the distance from `now` to `at` (e.g., "in 2h", "3d ago").
    pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let secs = (at - now).num_seconds();
        let magnitude = secs.unsigned_abs();
        let amount = if magnitude < 60 {
            format!("{}s", magnitude)
        } else if magnitude < 3600 {
            format!("{}m", magnitude / 60)
        } else if magnitude < 86400 {
            format!("{}h", magnitude / 3600)
        } else {
            format!("{}d", magnitude / 86400)
        };

        if secs >= 0 {
            format!("in {}", amount)
        } else {
            format!("{} ago", amount)
        }
    }
}

fn clamp_selection(state: &mut ListState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        None => state.select(Some(0)),
        Some(i) if i >= len => state.select(Some(len - 1)),
        Some(_) => {}
    }
}
