//! Job definition: a scheduled HTTP request.
//!
//! A job is recurring (it has a cron expression), one-off (it has a
//! `scheduleAt` timestamp), or both. Fixture records are loose: every field
//! may be missing or `null`, so they are read into [`JobRecord`] and
//! normalized into [`Job`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::cron::{RepeatPattern, date_to_cron};
use super::types::JobId;

/// Timezone used when a job does not name one.
pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";

/// Title shown for jobs without a name.
pub const UNTITLED: &str = "Untitled";

/// Errors that can occur when working with jobs.
#[derive(Debug, Error)]
pub enum JobError {
    /// The `scheduleAt` value is not a timestamp.
    #[error("invalid scheduleAt '{value}': {reason}")]
    InvalidScheduleAt { value: String, reason: String },

    /// Invalid timezone.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Unknown HTTP method.
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// A repeat pattern needs a `scheduleAt` to anchor on.
    #[error("a repeat pattern needs a scheduleAt to anchor on")]
    MissingAnchor,
}

/// HTTP method of a job's request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// All methods in the order the form offers them.
    pub fn all() -> &'static [HttpMethod] {
        &[
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
            HttpMethod::Patch,
        ]
    }

    /// The canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::all()
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| JobError::InvalidMethod(s.to_string()))
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = JobError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpHeader {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

impl HttpHeader {
    /// Create a header.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The HTTP request a job fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub http_method: HttpMethod,
    #[serde(deserialize_with = "null_as_default")]
    pub http_headers: Vec<HttpHeader>,
    /// Raw payload text, usually JSON.
    #[serde(deserialize_with = "null_as_empty_payload")]
    pub data: String,
}

impl Default for HttpRequest {
    fn default() -> Self {
        Self {
            url: String::new(),
            http_method: HttpMethod::Get,
            http_headers: Vec::new(),
            data: "{}".to_string(),
        }
    }
}

impl HttpRequest {
    /// Create a request with the given method and URL.
    pub fn new(http_method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http_method,
            ..Default::default()
        }
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.http_headers.push(HttpHeader::new(key, value));
        self
    }

    /// Set the payload.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// One-line `METHOD url` summary.
    pub fn summary(&self) -> String {
        if self.url.is_empty() {
            format!("{} -", self.http_method)
        } else {
            format!("{} {}", self.http_method, self.url)
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_payload<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| "{}".to_string()))
}

/// A job as it appears in `Order.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JobId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<HttpRequest>,
}

/// A normalized job.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    id: JobId,
    name: Option<String>,
    description: String,
    cron_expression: Option<String>,
    /// Kept as written; parsed on demand in the job's timezone.
    schedule_at: Option<String>,
    zone_id: String,
    request: Option<HttpRequest>,
}

impl Job {
    /// Create a job with no schedule in the default timezone.
    pub fn new(id: impl Into<JobId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: non_empty(Some(name.into())),
            description: String::new(),
            cron_expression: None,
            schedule_at: None,
            zone_id: DEFAULT_TIMEZONE.to_string(),
            request: None,
        }
    }

    /// Normalize a fixture record found at `index` in `Order.json`.
    ///
    /// Missing ids become `order-{index}`; blank schedule fields count as absent.
    pub fn from_record(record: JobRecord, index: usize, default_timezone: &str) -> Self {
        let id = record
            .id
            .unwrap_or_else(|| JobId::new(format!("order-{}", index)));

        Self {
            id,
            name: record.name,
            description: record.description.unwrap_or_default(),
            cron_expression: non_empty(record.cron_expression),
            schedule_at: non_empty(record.schedule_at),
            zone_id: non_empty(record.zone_id).unwrap_or_else(|| default_timezone.to_string()),
            request: record.request,
        }
    }

    /// Build a new job from a form submission.
    pub fn from_draft(id: JobId, draft: JobDraft) -> Self {
        let mut job = Self::new(id, "");
        job.apply(draft);
        job
    }

    /// Convert back to the fixture shape.
    pub fn to_record(&self) -> JobRecord {
        JobRecord {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            description: Some(self.description.clone()),
            cron_expression: self.cron_expression.clone(),
            schedule_at: self.schedule_at.clone(),
            zone_id: Some(self.zone_id.clone()),
            request: self.request.clone(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the cron expression.
    pub fn with_cron(mut self, expression: impl Into<String>) -> Self {
        self.cron_expression = non_empty(Some(expression.into()));
        self
    }

    /// Set the one-off timestamp.
    pub fn with_schedule_at(mut self, schedule_at: impl Into<String>) -> Self {
        self.schedule_at = non_empty(Some(schedule_at.into()));
        self
    }

    /// Set the timezone.
    pub fn with_zone(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = zone_id.into();
        self
    }

    /// Set the request.
    pub fn with_request(mut self, request: HttpRequest) -> Self {
        self.request = Some(request);
        self
    }

    /// Replace every editable field with the draft's values.
    pub fn apply(&mut self, draft: JobDraft) {
        self.name = non_empty(Some(draft.name));
        self.description = draft.description;
        self.cron_expression = non_empty(draft.cron_expression);
        self.schedule_at = non_empty(draft.schedule_at);
        if let Some(zone) = non_empty(Some(draft.zone_id)) {
            self.zone_id = zone;
        }
        self.request = draft.request;
    }

    /// Get the job ID.
    pub fn id(&self) -> &JobId {
        &self.id
    }

    /// Get the job name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The display title: the name, or `Untitled`.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(UNTITLED)
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the cron expression, if any.
    pub fn cron_expression(&self) -> Option<&str> {
        self.cron_expression.as_deref()
    }

    /// Get the raw one-off timestamp, if any.
    pub fn schedule_at(&self) -> Option<&str> {
        self.schedule_at.as_deref()
    }

    /// Get the timezone.
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// Get the request, if any.
    pub fn request(&self) -> Option<&HttpRequest> {
        self.request.as_ref()
    }

    /// Whether the job has a cron expression.
    pub fn is_recurring(&self) -> bool {
        self.cron_expression.is_some()
    }

    /// Whether the job has a one-off timestamp.
    pub fn is_one_off(&self) -> bool {
        self.schedule_at.is_some()
    }

    /// The one-off timestamp in UTC.
    ///
    /// Timestamps without an offset are read in the job's timezone.
    pub fn scheduled_at(&self) -> Result<Option<DateTime<Utc>>, JobError> {
        self.schedule_at
            .as_deref()
            .map(|value| parse_timestamp(value, &self.zone_id))
            .transpose()
    }

    /// What the schedule column shows: the cron expression, else `scheduleAt`.
    pub fn schedule_label(&self) -> &str {
        self.cron_expression()
            .or(self.schedule_at())
            .unwrap_or("-")
    }
}

/// A job form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDraft {
    pub name: String,
    pub description: String,
    pub schedule_at: Option<String>,
    pub zone_id: String,
    pub cron_expression: Option<String>,
    pub request: Option<HttpRequest>,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            schedule_at: None,
            zone_id: DEFAULT_TIMEZONE.to_string(),
            cron_expression: None,
            request: None,
        }
    }
}

impl JobDraft {
    /// Start a draft with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Prefill a draft from an existing job.
    pub fn from_job(job: &Job) -> Self {
        Self {
            name: job.name().unwrap_or_default().to_string(),
            description: job.description().to_string(),
            schedule_at: job.schedule_at().map(str::to_string),
            zone_id: job.zone_id().to_string(),
            cron_expression: job.cron_expression().map(str::to_string),
            request: job.request().cloned(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the one-off timestamp.
    pub fn with_schedule_at(mut self, schedule_at: impl Into<String>) -> Self {
        self.schedule_at = Some(schedule_at.into());
        self
    }

    /// Set the timezone.
    pub fn with_zone(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = zone_id.into();
        self
    }

    /// Set the cron expression.
    pub fn with_cron(mut self, expression: impl Into<String>) -> Self {
        self.cron_expression = Some(expression.into());
        self
    }

    /// Set the request.
    pub fn with_request(mut self, request: HttpRequest) -> Self {
        self.request = Some(request);
        self
    }

    /// Derive the cron expression from `scheduleAt` and a repeat pattern.
    ///
    /// The anchor is read in the draft's timezone. `None` clears the cron
    /// expression and `Custom` installs the given one without an anchor.
    pub fn with_repeat(mut self, pattern: &RepeatPattern) -> Result<Self, JobError> {
        self.cron_expression = match pattern {
            RepeatPattern::None => None,
            RepeatPattern::Custom(expr) => Some(expr.clone()),
            _ => {
                let value = non_empty(self.schedule_at.clone()).ok_or(JobError::MissingAnchor)?;
                let anchor = parse_timestamp(&value, &self.zone_id)?;
                let tz = parse_zone(&self.zone_id)?;
                date_to_cron(&anchor.with_timezone(&tz), pattern)
            }
        };
        Ok(self)
    }

    /// Fill in a daily cron from `scheduleAt` when no cron expression was given.
    ///
    /// This is what the job form submits when the repeat choice is left alone.
    pub fn with_default_repeat(self) -> Result<Self, JobError> {
        let has_anchor = self.schedule_at.as_deref().is_some_and(|s| !s.trim().is_empty());
        if self.cron_expression.is_some() || !has_anchor {
            return Ok(self);
        }
        self.with_repeat(&RepeatPattern::Daily)
    }
}

/// Parse a `scheduleAt` value.
///
/// RFC 3339 timestamps carry their own offset. Naive timestamps
/// (`2024-01-01T09:00`, `2024-01-01 09:00`) and bare dates are read in
/// `timezone`.
pub fn parse_timestamp(value: &str, timezone: &str) -> Result<DateTime<Utc>, JobError> {
    let value = value.trim();
    let invalid = |reason: String| JobError::InvalidScheduleAt {
        value: value.to_string(),
        reason,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| invalid("not a recognized timestamp".to_string()))?;

    let tz = parse_zone(timezone)?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| invalid(format!("does not exist in {}", timezone)))
}

fn parse_zone(timezone: &str) -> Result<Tz, JobError> {
    timezone
        .trim()
        .parse()
        .map_err(|_| JobError::InvalidTimezone(timezone.to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_fills_defaults() {
        let record: JobRecord = serde_json::from_str(r#"{"cronExpression": "0 9 * * *"}"#).unwrap();
        let job = Job::from_record(record, 3, DEFAULT_TIMEZONE);

        assert_eq!(job.id().as_str(), "order-3");
        assert_eq!(job.title(), UNTITLED);
        assert_eq!(job.name(), None);
        assert_eq!(job.zone_id(), "Asia/Jakarta");
        assert_eq!(job.description(), "");
        assert!(job.is_recurring());
        assert!(!job.is_one_off());
    }

    #[test]
    fn test_from_record_accepts_nulls_everywhere() {
        let json = r#"{
            "id": 7,
            "name": null,
            "description": null,
            "cronExpression": null,
            "scheduleAt": "",
            "zoneId": null,
            "request": {"url": null, "httpMethod": null, "httpHeaders": null, "data": null}
        }"#;
        let record: JobRecord = serde_json::from_str(json).unwrap();
        let job = Job::from_record(record, 0, "UTC");

        assert_eq!(job.id().as_str(), "7");
        assert!(!job.is_recurring());
        assert!(!job.is_one_off());
        assert_eq!(job.zone_id(), "UTC");

        let request = job.request().unwrap();
        assert_eq!(request.url, "");
        assert_eq!(request.http_method, HttpMethod::Get);
        assert!(request.http_headers.is_empty());
        assert_eq!(request.data, "{}");
    }

    #[test]
    fn test_full_record_round_trips_through_job() {
        let json = r#"{
            "id": "abc",
            "name": "Ping",
            "description": "health check",
            "cronExpression": "*/5 * * * *",
            "zoneId": "UTC",
            "request": {
                "url": "https://example.com/health",
                "httpMethod": "post",
                "httpHeaders": [{"key": "Authorization", "value": "Bearer x"}],
                "data": "{\"ping\":true}"
            }
        }"#;
        let record: JobRecord = serde_json::from_str(json).unwrap();
        let job = Job::from_record(record.clone(), 0, DEFAULT_TIMEZONE);

        let request = job.request().unwrap();
        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.summary(), "POST https://example.com/health");
        assert_eq!(request.http_headers[0], HttpHeader::new("Authorization", "Bearer x"));

        let back = job.to_record();
        assert_eq!(back.id, record.id);
        assert_eq!(back.cron_expression, record.cron_expression);
        assert_eq!(back.request, record.request);
    }

    #[test]
    fn test_http_method_parsing() {
        assert_eq!("patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert_eq!(" DELETE ".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert!("TRACE".parse::<HttpMethod>().is_err());

        let json = serde_json::to_string(&HttpMethod::Put).unwrap();
        assert_eq!(json, "\"PUT\"");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(parse_timestamp("2024-01-01T00:00:00Z", "Asia/Jakarta").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-01-01T00:00:00.000Z", "UTC").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-01-01T07:00:00+07:00", "UTC").unwrap(), expected);

        // Naive values are read in the given timezone (Jakarta is UTC+7)
        assert_eq!(parse_timestamp("2024-01-01T07:00", "Asia/Jakarta").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-01-01 07:00", "Asia/Jakarta").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-01-01", "UTC").unwrap(), expected);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        match parse_timestamp("next tuesday", "UTC") {
            Err(JobError::InvalidScheduleAt { value, .. }) => assert_eq!(value, "next tuesday"),
            other => panic!("expected InvalidScheduleAt, got {:?}", other),
        }

        match parse_timestamp("2024-01-01T07:00", "Nowhere/Land") {
            Err(JobError::InvalidTimezone(_)) => {}
            other => panic!("expected InvalidTimezone, got {:?}", other),
        }
    }

    #[test]
    fn test_scheduled_at_uses_job_zone() {
        let job = Job::new(1u64, "Once")
            .with_zone("UTC")
            .with_schedule_at("2024-06-01 12:00");

        assert_eq!(
            job.scheduled_at().unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
        );

        let no_schedule = Job::new(2u64, "Never");
        assert_eq!(no_schedule.scheduled_at().unwrap(), None);
    }

    #[test]
    fn test_draft_with_repeat_anchors_in_zone() {
        // 2024-01-01T02:30Z is 09:30 on a Monday in Jakarta
        let draft = JobDraft::new("Report")
            .with_schedule_at("2024-01-01T02:30:00Z")
            .with_zone("Asia/Jakarta")
            .with_repeat(&RepeatPattern::Weekly)
            .unwrap();

        assert_eq!(draft.cron_expression.as_deref(), Some("30 9 * * MON"));

        let cleared = draft.with_repeat(&RepeatPattern::None).unwrap();
        assert_eq!(cleared.cron_expression, None);
    }

    #[test]
    fn test_draft_with_repeat_needs_anchor() {
        let result = JobDraft::new("No anchor").with_repeat(&RepeatPattern::Daily);
        assert!(matches!(result, Err(JobError::MissingAnchor)));

        let custom = JobDraft::new("Custom")
            .with_repeat(&RepeatPattern::Custom("0 0 * * *".into()))
            .unwrap();
        assert_eq!(custom.cron_expression.as_deref(), Some("0 0 * * *"));
    }

    #[test]
    fn test_default_repeat_is_daily_from_anchor() {
        let draft = JobDraft::new("Backup")
            .with_zone("Asia/Jakarta")
            .with_schedule_at("2024-01-01 21:15")
            .with_default_repeat()
            .unwrap();
        assert_eq!(draft.cron_expression.as_deref(), Some("15 21 * * *"));

        let kept = JobDraft::new("Kept")
            .with_schedule_at("2024-01-01 21:15")
            .with_cron("0 6 * * MON")
            .with_default_repeat()
            .unwrap();
        assert_eq!(kept.cron_expression.as_deref(), Some("0 6 * * MON"));

        let bare = JobDraft::new("Bare").with_default_repeat().unwrap();
        assert!(bare.cron_expression.is_none());
    }

    #[test]
    fn test_apply_replaces_fields() {
        let mut job = Job::new(1u64, "Old")
            .with_cron("0 9 * * *")
            .with_zone("UTC")
            .with_description("old");

        job.apply(
            JobDraft::new("New")
                .with_description("new")
                .with_schedule_at("2024-01-01T00:00:00Z")
                .with_zone("")
                .with_request(HttpRequest::new(HttpMethod::Post, "https://example.com")),
        );

        assert_eq!(job.title(), "New");
        assert_eq!(job.description(), "new");
        assert_eq!(job.cron_expression(), None);
        assert_eq!(job.schedule_at(), Some("2024-01-01T00:00:00Z"));
        // A blank zone keeps the existing one
        assert_eq!(job.zone_id(), "UTC");
        assert!(job.request().is_some());
    }

    #[test]
    fn test_draft_from_job_prefills_form() {
        let job = Job::new("5", "Sync")
            .with_cron("0 1 * * *")
            .with_zone("Europe/London");
        let draft = JobDraft::from_job(&job);

        assert_eq!(draft.name, "Sync");
        assert_eq!(draft.cron_expression.as_deref(), Some("0 1 * * *"));
        assert_eq!(draft.zone_id, "Europe/London");

        let rebuilt = Job::from_draft(job.id().clone(), draft);
        assert_eq!(rebuilt, job);
    }

    #[test]
    fn test_schedule_label() {
        let both = Job::new("1", "x").with_cron("0 9 * * *").with_schedule_at("2024-01-01");
        assert_eq!(both.schedule_label(), "0 9 * * *");

        let once = Job::new("2", "y").with_schedule_at("2024-01-01");
        assert_eq!(once.schedule_label(), "2024-01-01");

        assert_eq!(Job::new("3", "z").schedule_label(), "-");
    }
}
