//! A café order and the record left behind once it is completed.
//!
//! Orders are owned by the [`OrderQueue`](crate::order_actor::OrderQueue) while pending and
//! move into the [`CompletionLedger`](crate::order_actor::CompletionLedger) as an immutable
//! [`CompletionRecord`] when completed.

use crate::model::timestamp::{seconds_between, Timestamp};
use serde::Serialize;
use std::fmt::Display;

/// Type-safe identifier for Orders. Assigned from 1 upward and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Menu names in preparation order.
    pub menus: Vec<String>,
    pub created_at: Timestamp,
    pub predicted_completion: Timestamp,
    /// Set exactly once, when the order is completed.
    pub actual_completion: Option<Timestamp>,
}

impl Order {
    pub fn new(
        id: OrderId,
        menus: Vec<String>,
        created_at: Timestamp,
        predicted_completion: Timestamp,
    ) -> Self {
        Self {
            id,
            menus,
            created_at,
            predicted_completion,
            actual_completion: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.actual_completion.is_some()
    }
}

/// Whether an order finished after or before its prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeliness {
    Late,
    Early,
}

impl Timeliness {
    /// Strictly positive delay is late; zero counts as early.
    pub fn from_delay(delay_seconds: f64) -> Self {
        if delay_seconds > 0.0 {
            Timeliness::Late
        } else {
            Timeliness::Early
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeliness::Late => "late",
            Timeliness::Early => "early",
        }
    }
}

impl Display for Timeliness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of an order at the moment it was completed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRecord {
    pub order_id: OrderId,
    pub menus: Vec<String>,
    pub predicted: Timestamp,
    pub actual: Timestamp,
    /// `actual - predicted` in seconds, one decimal place. Positive means late.
    pub delay_seconds: f64,
}

impl CompletionRecord {
    pub fn new(order: &Order, actual: Timestamp) -> Self {
        Self {
            order_id: order.id,
            menus: order.menus.clone(),
            predicted: order.predicted_completion,
            actual,
            delay_seconds: seconds_between(&order.predicted_completion, &actual),
        }
    }

    pub fn timeliness(&self) -> Timeliness {
        Timeliness::from_delay(self.delay_seconds)
    }

    pub fn is_early(&self) -> bool {
        self.delay_seconds < 0.0
    }
}
