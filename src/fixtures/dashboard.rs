//! Dashboard summary data (`data.json`) and the metrics derived from it.

use serde::{Deserialize, Deserializer, Serialize};

/// Contents of `data.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub profile: Profile,
    pub menu: Vec<MenuItem>,
    pub transactions: Transactions,
}

/// The signed-in user shown in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
}

/// A sidebar menu entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub title: String,
}

/// Transaction counters.
///
/// Any JSON number is accepted: fractions are rounded, negatives and nulls
/// read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transactions {
    #[serde(deserialize_with = "count")]
    pub total: u64,
    #[serde(deserialize_with = "count")]
    pub failed: u64,
    #[serde(deserialize_with = "count")]
    pub successful: u64,
    /// One count per day of the week.
    #[serde(deserialize_with = "counts")]
    pub weekly: Vec<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl Number {
    fn to_count(self) -> u64 {
        match self {
            Number::Unsigned(n) => n,
            Number::Signed(n) => u64::try_from(n).unwrap_or(0),
            // `as` saturates at u64::MAX
            Number::Float(f) if f.is_finite() && f > 0.0 => f.round() as u64,
            Number::Float(_) => 0,
        }
    }
}

fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Option::<Number>::deserialize(deserializer)?.map_or(0, Number::to_count))
}

fn counts<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u64>, D::Error> {
    let values = Option::<Vec<Option<Number>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .into_iter()
        .map(|n| n.map_or(0, Number::to_count))
        .collect())
}

impl DashboardData {
    /// Metrics for the summary cards.
    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics::from(&self.transactions)
    }
}

/// Figures shown on the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total: u64,
    pub failed: u64,
    pub successful: u64,
    /// Failed share of `total`, in percent. Zero when there are no transactions.
    pub failure_rate: f64,
    /// Successful share of `total`, in percent.
    pub success_rate: f64,
    pub weekly_total: u64,
    pub weekly_peak: u64,
}

impl From<&Transactions> for DashboardMetrics {
    fn from(transactions: &Transactions) -> Self {
        let rate = |part: u64| {
            if transactions.total == 0 {
                0.0
            } else {
                part as f64 * 100.0 / transactions.total as f64
            }
        };

        Self {
            total: transactions.total,
            failed: transactions.failed,
            successful: transactions.successful,
            failure_rate: rate(transactions.failed),
            success_rate: rate(transactions.successful),
            weekly_total: transactions.weekly.iter().fold(0, |acc, &n| acc.saturating_add(n)),
            weekly_peak: transactions.weekly.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Format a count with thousands separators (`3782` -> `3,782`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
