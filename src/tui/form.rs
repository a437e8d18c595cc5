//! Job form for creating and editing jobs.
//!
//! The form edits a [`JobDraft`] field by field. Text fields take typed
//! characters; the zone and method fields cycle through fixed choices.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::job::{HttpHeader, HttpMethod, HttpRequest, Job, JobDraft, JobError};
use crate::core::types::{JobId, OccurrenceId};

/// Timezones offered by the zone field.
pub const ZONES: [&str; 4] = ["Asia/Jakarta", "UTC", "America/New_York", "Europe/London"];

/// A form field, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    ScheduleAt,
    Zone,
    Cron,
    Url,
    Method,
    Headers,
    Payload,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Description,
            FormField::ScheduleAt,
            FormField::Zone,
            FormField::Cron,
            FormField::Url,
            FormField::Method,
            FormField::Headers,
            FormField::Payload,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Job Name",
            FormField::Description => "Description",
            FormField::ScheduleAt => "Schedule At",
            FormField::Zone => "Zone",
            FormField::Cron => "Cron",
            FormField::Url => "URL",
            FormField::Method => "HTTP Method",
            FormField::Headers => "Headers",
            FormField::Payload => "Payload",
        }
    }

    /// Fields that cycle through choices instead of taking text.
    pub fn is_choice(&self) -> bool {
        matches!(self, FormField::Zone | FormField::Method)
    }

    fn index(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    fn next(&self) -> FormField {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    fn prev(&self) -> FormField {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// What submitting the form changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    /// Create a new job.
    Create,
    /// Edit the job owning a calendar occurrence.
    Occurrence(OccurrenceId),
    /// Edit a job picked from the jobs table.
    Job(JobId),
}

/// Outcome of a key press in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Keep editing.
    Continue,
    Submit,
    Cancel,
}

/// State of the job form.
#[derive(Debug, Clone)]
pub struct JobForm {
    pub target: FormTarget,
    pub focus: FormField,
    name: String,
    description: String,
    schedule_at: String,
    cron: String,
    url: String,
    headers: String,
    payload: String,
    zones: Vec<String>,
    zone: usize,
    method: HttpMethod,
}

impl JobForm {
    /// An empty form for a new job.
    pub fn create() -> Self {
        Self::from_draft(FormTarget::Create, JobDraft::default())
    }

    /// A form prefilled from an existing job.
    pub fn edit(target: FormTarget, job: &Job) -> Self {
        Self::from_draft(target, JobDraft::from_job(job))
    }

    fn from_draft(target: FormTarget, draft: JobDraft) -> Self {
        let mut zones: Vec<String> = ZONES.iter().map(|z| z.to_string()).collect();
        let zone = match zones.iter().position(|z| z == &draft.zone_id) {
            Some(i) => i,
            None => {
                zones.push(draft.zone_id.clone());
                zones.len() - 1
            }
        };

        let request = draft.request.unwrap_or_default();
        let headers = request
            .http_headers
            .iter()
            .map(|h| format!("{}: {}", h.key, h.value))
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            target,
            focus: FormField::Name,
            name: draft.name,
            description: draft.description,
            schedule_at: draft.schedule_at.unwrap_or_default(),
            cron: draft.cron_expression.unwrap_or_default(),
            url: request.url,
            headers,
            payload: request.data,
            zones,
            zone,
            method: request.http_method,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.target {
            FormTarget::Create => "Add Job",
            FormTarget::Occurrence(_) | FormTarget::Job(_) => "Edit Job",
        }
    }

    /// The text shown for a field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::ScheduleAt => &self.schedule_at,
            FormField::Zone => self.zones.get(self.zone).map(String::as_str).unwrap_or("UTC"),
            FormField::Cron => &self.cron,
            FormField::Url => &self.url,
            FormField::Method => self.method.as_str(),
            FormField::Headers => &self.headers,
            FormField::Payload => &self.payload,
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::ScheduleAt => Some(&mut self.schedule_at),
            FormField::Cron => Some(&mut self.cron),
            FormField::Url => Some(&mut self.url),
            FormField::Headers => Some(&mut self.headers),
            FormField::Payload => Some(&mut self.payload),
            FormField::Zone | FormField::Method => None,
        }
    }

    fn cycle(&mut self, forward: bool) {
        match self.focus {
            FormField::Zone => {
                let len = self.zones.len();
                self.zone = if forward { (self.zone + 1) % len } else { (self.zone + len - 1) % len };
            }
            FormField::Method => {
                let all = HttpMethod::all();
                let i = all.iter().position(|m| *m == self.method).unwrap_or(0);
                let i = if forward { (i + 1) % all.len() } else { (i + all.len() - 1) % all.len() };
                self.method = all[i];
            }
            _ => {}
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.focus = self.focus.prev(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Left if self.focus.is_choice() => self.cycle(false),
            KeyCode::Right | KeyCode::Char(' ') if self.focus.is_choice() => self.cycle(true),
            KeyCode::Backspace => {
                if let Some(text) = self.text_mut(self.focus) {
                    text.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(text) = self.text_mut(self.focus) {
                    text.push(c);
                }
            }
            _ => {}
        }
        FormAction::Continue
    }

    /// Build the draft to submit.
    ///
    /// A blank cron with a `scheduleAt` repeats daily at that time. The
    /// request is dropped when the URL, headers and payload are all empty.
    pub fn to_draft(&self) -> Result<JobDraft, JobError> {
        let mut draft = JobDraft::new(self.name.trim())
            .with_description(self.description.trim())
            .with_zone(self.value(FormField::Zone));

        if !self.schedule_at.trim().is_empty() {
            draft = draft.with_schedule_at(self.schedule_at.trim());
        }
        if !self.cron.trim().is_empty() {
            draft = draft.with_cron(self.cron.trim());
        }

        let headers = parse_headers(&self.headers);
        let payload = self.payload.trim();
        let has_payload = !payload.is_empty() && payload != "{}";
        if !self.url.trim().is_empty() || !headers.is_empty() || has_payload {
            let mut request = HttpRequest::new(self.method, self.url.trim());
            request.http_headers = headers;
            if !payload.is_empty() {
                request = request.with_data(payload);
            }
            draft = draft.with_request(request);
        }

        draft.with_default_repeat()
    }
}

/// Parse `Key: Value; Other: Value` into headers, skipping entries without a key.
fn parse_headers(text: &str) -> Vec<HttpHeader> {
    text.split(';')
        .filter_map(|entry| {
            let (key, value) = entry.split_once(':').unwrap_or((entry, ""));
            let key = key.trim();
            (!key.is_empty()).then(|| HttpHeader::new(key, value.trim()))
        })
        .collect()
}
