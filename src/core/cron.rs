//! Cron codec: repeat patterns to cron strings, and cron strings to fire times.
//!
//! Supports standard 5-field cron (with Sunday as `0` or `7`), extended
//! 6-field cron with seconds, and the `@daily`-style shortcuts.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use cron::Schedule;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing or evaluating cron schedules.
#[derive(Debug, Error)]
pub enum CronError {
    /// Invalid cron expression.
    #[error("invalid cron expression: {0}")]
    InvalidCron(String),

    /// Invalid timezone.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Unknown repeat pattern keyword.
    #[error("invalid repeat pattern: {0}")]
    InvalidRepeat(String),

    /// No more occurrences.
    #[error("no more occurrences")]
    NoMoreOccurrences,
}

/// How often a picked date should repeat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RepeatPattern {
    /// Fire once; no cron expression.
    #[default]
    None,
    Daily,
    Every3Days,
    Weekly,
    Monthly,
    ThreeMonthly,
    SixMonthly,
    Yearly,
    /// A user-supplied expression, passed through unchecked.
    Custom(String),
}

impl RepeatPattern {
    /// Parse a pattern keyword. `custom` needs the expression alongside it.
    pub fn from_keyword(keyword: &str, custom: Option<&str>) -> Result<Self, CronError> {
        match keyword.trim().to_lowercase().as_str() {
            "none" | "once" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "every3days" => Ok(Self::Every3Days),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "3monthly" => Ok(Self::ThreeMonthly),
            "6monthly" => Ok(Self::SixMonthly),
            "yearly" => Ok(Self::Yearly),
            "custom" => custom
                .map(|expr| Self::Custom(expr.to_string()))
                .ok_or_else(|| CronError::InvalidRepeat("custom requires an expression".into())),
            other => Err(CronError::InvalidRepeat(other.to_string())),
        }
    }

    /// The keyword this pattern parses from.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Every3Days => "every3days",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::ThreeMonthly => "3monthly",
            Self::SixMonthly => "6monthly",
            Self::Yearly => "yearly",
            Self::Custom(_) => "custom",
        }
    }
}

impl FromStr for RepeatPattern {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s, None)
    }
}

impl fmt::Display for RepeatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Build a 5-field cron expression that repeats `date` with `pattern`.
///
/// Anchors (minute, hour, day, month, weekday) are read in the timezone the
/// timestamp carries. Returns `None` for [`RepeatPattern::None`].
pub fn date_to_cron<Z: TimeZone>(date: &DateTime<Z>, pattern: &RepeatPattern) -> Option<String> {
    let minute = date.minute();
    let hour = date.hour();
    let day = date.day();
    let month = date.month();

    let expression = match pattern {
        RepeatPattern::None => return None,
        RepeatPattern::Custom(expr) => return Some(expr.clone()),
        RepeatPattern::Daily => format!("{minute} {hour} * * *"),
        RepeatPattern::Every3Days => format!("{minute} {hour} */3 * *"),
        RepeatPattern::Weekly => {
            format!("{minute} {hour} * * {}", weekday_name(date.weekday()))
        }
        RepeatPattern::Monthly => format!("{minute} {hour} {day} * *"),
        RepeatPattern::ThreeMonthly => format!("{minute} {hour} {day} {} *", months_from(month, 3)),
        RepeatPattern::SixMonthly => format!("{minute} {hour} {day} {} *", months_from(month, 6)),
        RepeatPattern::Yearly => format!("{minute} {hour} {day} {month} *"),
    };

    Some(expression)
}

/// The next `count` fire times of `expression` strictly after `now`.
///
/// Evaluated in `timezone`, returned in UTC. An unparsable expression or an
/// unknown timezone yields an empty list and a warning.
pub fn cron_to_next_occurrences(
    expression: &str,
    timezone: &str,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<DateTime<Utc>> {
    match CronSchedule::with_timezone(expression, timezone) {
        Ok(schedule) => schedule.next_n_after(now, count),
        Err(e) => {
            tracing::warn!(expression, timezone, error = %e, "Failed to parse cron expression");
            Vec::new()
        }
    }
}

/// Every `step`-th month starting at `month`, wrapping into the next year.
///
/// `M/3` in cron restarts each January, so an October anchor would fire only
/// once a year; a month list keeps the cadence.
fn months_from(month: u32, step: u32) -> String {
    let mut months: Vec<u32> = (0..12 / step).map(|k| (month - 1 + k * step) % 12 + 1).collect();
    months.sort_unstable();
    months
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "SUN",
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
    }
}

/// A parsed cron schedule bound to a timezone.
#[derive(Debug, Clone)]
pub struct CronSchedule {
    /// The original expression string.
    expression: String,
    /// The timezone fire times are computed in.
    timezone: Tz,
    /// One schedule, or two when day-of-month and weekday are both restricted.
    schedules: Vec<Schedule>,
}

impl CronSchedule {
    /// Parse a cron expression evaluated in UTC.
    pub fn new(expression: impl Into<String>) -> Result<Self, CronError> {
        Self::with_timezone(expression, "UTC")
    }

    /// Parse a cron expression evaluated in the named IANA timezone.
    pub fn with_timezone(
        expression: impl Into<String>,
        timezone: &str,
    ) -> Result<Self, CronError> {
        let expression = expression.into();
        let timezone: Tz = timezone
            .trim()
            .parse()
            .map_err(|_| CronError::InvalidTimezone(timezone.to_string()))?;

        let schedules = Self::parse_expression(&expression)?;

        Ok(Self {
            expression,
            timezone,
            schedules,
        })
    }

    fn parse_expression(expression: &str) -> Result<Vec<Schedule>, CronError> {
        let trimmed = expression.trim();

        if trimmed.starts_with('@') {
            return Self::parse_shortcut(trimmed);
        }

        Self::parse_cron(trimmed)
    }

    fn parse_shortcut(expression: &str) -> Result<Vec<Schedule>, CronError> {
        match expression.to_lowercase().as_str() {
            "@yearly" | "@annually" => Self::parse_cron("0 0 1 1 *"),
            "@monthly" => Self::parse_cron("0 0 1 * *"),
            "@weekly" => Self::parse_cron("0 0 * * SUN"),
            "@daily" | "@midnight" => Self::parse_cron("0 0 * * *"),
            "@hourly" => Self::parse_cron("0 * * * *"),
            _ => Err(CronError::InvalidCron(format!(
                "unknown shortcut: {}",
                expression
            ))),
        }
    }

    fn parse_cron(expression: &str) -> Result<Vec<Schedule>, CronError> {
        let fields: Vec<&str> = expression.split_whitespace().collect();

        // The cron crate wants seconds and numbers weekdays from 1 = Sunday.
        let (seconds, rest) = match fields.len() {
            5 => ("0", &fields[..]),
            6 => (fields[0], &fields[1..]),
            n => {
                return Err(CronError::InvalidCron(format!(
                    "expected 5 or 6 fields, got {}",
                    n
                )));
            }
        };
        let [minute, hour, day, month, weekday] = [rest[0], rest[1], rest[2], rest[3], rest[4]];
        let weekday = translate_weekday_field(weekday)?;

        // Standard cron fires when either day field matches if both are
        // restricted; the cron crate requires both, so split the expression.
        let restricted = |field: &str| field != "*" && field != "?";
        let variants = if restricted(day) && restricted(&weekday) {
            vec![(day, "*"), ("*", weekday.as_str())]
        } else {
            vec![(day, weekday.as_str())]
        };

        variants
            .into_iter()
            .map(|(day, weekday)| {
                let cron_expr = format!("{seconds} {minute} {hour} {day} {month} {weekday}");
                Schedule::from_str(&cron_expr).map_err(|e| CronError::InvalidCron(e.to_string()))
            })
            .collect()
    }

    /// Get the next fire time strictly after `after`.
    pub fn next_after(&self, after: DateTime<Utc>) -> Result<DateTime<Utc>, CronError> {
        self.upcoming(after)
            .next()
            .ok_or(CronError::NoMoreOccurrences)
    }

    /// Lazily iterate fire times strictly after `after`.
    pub fn upcoming(&self, after: DateTime<Utc>) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        let local_time = after.with_timezone(&self.timezone);
        let mut streams: Vec<_> = self
            .schedules
            .iter()
            .map(|schedule| schedule.after(&local_time).peekable())
            .collect();

        // Merge in order; a time matched by both day fields is yielded once.
        std::iter::from_fn(move || {
            let next = streams.iter_mut().filter_map(|s| s.peek().cloned()).min()?;
            for stream in streams.iter_mut() {
                if stream.peek() == Some(&next) {
                    stream.next();
                }
            }
            Some(next.with_timezone(&Utc))
        })
    }

    /// Get the next `n` fire times strictly after `after`.
    pub fn next_n_after(&self, after: DateTime<Utc>, n: usize) -> Vec<DateTime<Utc>> {
        self.upcoming(after).take(n).collect()
    }

    /// Get the original expression string.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Get the timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

/// Rewrite numeric weekdays from standard cron (0-7, Sunday = 0 or 7) into
/// day names, which every cron dialect reads the same way.
fn translate_weekday_field(field: &str) -> Result<String, CronError> {
    const NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

    let mut items = Vec::new();
    for item in field.split(',') {
        let (base, step) = match item.split_once('/') {
            Some((base, step)) => {
                let step: u32 = step
                    .parse()
                    .map_err(|_| CronError::InvalidCron(format!("bad weekday step: {}", item)))?;
                (base, step.max(1))
            }
            None => (item, 1),
        };

        let is_numeric = !base.is_empty() && base.chars().all(|c| c.is_ascii_digit() || c == '-');
        if base == "*" || base == "?" || !is_numeric {
            items.push(item.to_string());
            continue;
        }

        let (start, end) = match base.split_once('-') {
            Some((a, b)) => (parse_weekday(a, item)?, parse_weekday(b, item)?),
            None => {
                let day = parse_weekday(base, item)?;
                // `5/2` means "from Friday every 2 days" in standard cron.
                (day, if step > 1 { 7 } else { day })
            }
        };
        if start > end {
            return Err(CronError::InvalidCron(format!("bad weekday range: {}", item)));
        }

        for day in (start..=end).step_by(step as usize) {
            let name = NAMES[(day % 7) as usize];
            if !items.iter().any(|existing| existing == name) {
                items.push(name.to_string());
            }
        }
    }

    Ok(items.join(","))
}

fn parse_weekday(value: &str, item: &str) -> Result<u32, CronError> {
    match value.parse::<u32>() {
        Ok(day) if day <= 7 => Ok(day),
        _ => Err(CronError::InvalidCron(format!("bad weekday: {}", item))),
    }
}
