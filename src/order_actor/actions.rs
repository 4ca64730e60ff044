//! Messages understood by the café actor.
//!
//! Every request the outside world can make is a [`QueueAction`]. The actor answers with the
//! [`QueueActionResult`] variant of the same name. Read-only inspection goes through the
//! framework's snapshot path and yields a [`CafeSnapshot`].

use crate::model::{CompletionRecord, Order, OrderId, Timestamp};
use crate::order_actor::Summary;

#[derive(Debug, Clone, PartialEq)]
pub enum QueueAction {
    /// One generation attempt (only while operating), then the pending list.
    Poll,
    /// Turns the operating flag on. Idempotent.
    Start,
    /// Shifts an order, and every order behind it, by a number of minutes.
    Delay { order_id: OrderId, minutes: i64 },
    /// Completes an order at the current time.
    Complete { order_id: OrderId },
    /// Aggregates the completion ledger.
    Summarize,
}

/// Results from QueueActions - variants match 1:1 with QueueAction
#[derive(Debug, Clone, PartialEq)]
pub enum QueueActionResult {
    Poll(Vec<Order>),
    /// Whether the flag was already set.
    Start(bool),
    /// The delayed order's new prediction.
    Delay(Timestamp),
    Complete(CompletionRecord),
    Summarize(Summary),
}

/// Read-only view of the café state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CafeSnapshot {
    pub operating: bool,
    pub pending: usize,
    pub completed: usize,
    pub next_id: OrderId,
}
