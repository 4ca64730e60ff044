//! Append-only record of completed orders.

use crate::model::CompletionRecord;
use tracing::debug;

/// Whether completions that beat their prediction are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EarlyCompletionPolicy {
    /// Every completion is recorded.
    #[default]
    Record,
    /// Completions with a negative delay are dropped from the ledger. The completion itself
    /// still succeeds. This skews the summary toward lateness.
    Discard,
}

/// Completion records in completion order. Records are never mutated or removed.
#[derive(Debug, Clone, Default)]
pub struct CompletionLedger {
    records: Vec<CompletionRecord>,
    policy: EarlyCompletionPolicy,
}

impl CompletionLedger {
    pub fn new(policy: EarlyCompletionPolicy) -> Self {
        Self {
            records: Vec::new(),
            policy,
        }
    }

    /// Appends a record unless the policy discards it. Returns whether it was kept.
    pub fn append(&mut self, record: CompletionRecord) -> bool {
        if self.policy == EarlyCompletionPolicy::Discard && record.is_early() {
            debug!(order_id = %record.order_id, "Early completion left out of ledger");
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, Timestamp};
    use chrono::{FixedOffset, TimeDelta, TimeZone};

    fn record(id: u64, delay: i64) -> CompletionRecord {
        let predicted: Timestamp = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap();
        CompletionRecord {
            order_id: OrderId(id),
            menus: vec!["Cold Brew".into()],
            predicted,
            actual: predicted + TimeDelta::seconds(delay),
            delay_seconds: delay as f64,
        }
    }

    #[test]
    fn keeps_completion_order() {
        let mut ledger = CompletionLedger::default();
        assert!(ledger.append(record(3, 5)));
        assert!(ledger.append(record(1, -5)));
        assert!(ledger.append(record(2, 0)));

        let ids: Vec<u64> = ledger.records().iter().map(|r| r.order_id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn discard_policy_drops_only_early_records() {
        let mut ledger = CompletionLedger::new(EarlyCompletionPolicy::Discard);
        assert!(ledger.append(record(1, 12)));
        assert!(!ledger.append(record(2, -1)));
        assert!(ledger.append(record(3, 0)));

        assert_eq!(ledger.len(), 2);
        assert!(ledger.records().iter().all(|r| r.delay_seconds >= 0.0));
    }
}
