//! Accuracy and delay statistics over the completion ledger.

use crate::model::timestamp::round1;
use crate::model::{CompletionRecord, OrderId, Timeliness, Timestamp};

/// Deviation, in seconds, at which an order's accuracy reaches zero.
pub const DEFAULT_TOLERANCE_SECONDS: f64 = 180.0;

/// How a single order's deviation turns into an accuracy score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccuracyPolicy {
    /// `max(0, 1 - |delay| / tolerance)`: early and late are penalised alike.
    #[default]
    Symmetric,
    /// `clamp(1 - delay / tolerance, 0, 1)`: only lateness costs accuracy.
    LatenessOnly,
}

/// One completed order as shown in the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub order_id: OrderId,
    pub menus: Vec<String>,
    pub predicted: Timestamp,
    pub actual: Timestamp,
    pub delay_seconds: f64,
    pub status: Timeliness,
}

impl From<&CompletionRecord> for SummaryLine {
    fn from(record: &CompletionRecord) -> Self {
        Self {
            order_id: record.order_id,
            menus: record.menus.clone(),
            predicted: record.predicted,
            actual: record.actual,
            delay_seconds: record.delay_seconds,
            status: record.timeliness(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// Mean accuracy × 100, one decimal.
    pub average_accuracy_percent: f64,
    /// Mean signed delay, one decimal. Negative means the queue runs early on average.
    pub average_delay_seconds: f64,
    pub orders: Vec<SummaryLine>,
}

/// Result of summarizing the ledger.
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    /// Nothing has been completed (or kept) yet.
    Empty,
    Report(SummaryReport),
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        matches!(self, Summary::Empty)
    }
}

/// Accuracy in `[0, 1]` for one order.
pub fn accuracy(delay_seconds: f64, policy: AccuracyPolicy, tolerance_seconds: f64) -> f64 {
    if tolerance_seconds.is_nan() || tolerance_seconds <= 0.0 {
        return if delay_seconds == 0.0 { 1.0 } else { 0.0 };
    }
    match policy {
        AccuracyPolicy::Symmetric => (1.0 - delay_seconds.abs() / tolerance_seconds).max(0.0),
        AccuracyPolicy::LatenessOnly => (1.0 - delay_seconds / tolerance_seconds).clamp(0.0, 1.0),
    }
}

pub fn summarize(
    records: &[CompletionRecord],
    policy: AccuracyPolicy,
    tolerance_seconds: f64,
) -> Summary {
    if records.is_empty() {
        return Summary::Empty;
    }

    let count = records.len() as f64;
    let (accuracy_total, delay_total) =
        records.iter().fold((0.0, 0.0), |(acc, delay), record| {
            (
                acc + accuracy(record.delay_seconds, policy, tolerance_seconds),
                delay + record.delay_seconds,
            )
        });

    Summary::Report(SummaryReport {
        average_accuracy_percent: round1(accuracy_total / count * 100.0),
        average_delay_seconds: round1(delay_total / count),
        orders: records.iter().map(SummaryLine::from).collect(),
    })
}
