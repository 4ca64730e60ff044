//! The café state and its [`ActorEntity`] implementation.
//!
//! [`CafeState`] owns everything that changes: the pending queue, the completion ledger, the
//! generation RNG and the operating flag. The synchronous methods hold the logic and are
//! directly testable. The `ActorEntity` impl only reads the clock and dispatches.

use super::actions::{CafeSnapshot, QueueAction, QueueActionResult};
use super::ledger::CompletionLedger;
use super::queue::OrderQueue;
use super::settings::QueueSettings;
use super::summary::{summarize, AccuracyPolicy, Summary};
use super::QueueError;
use crate::clock::SharedClock;
use crate::model::{CompletionRecord, MenuCatalog, Order, OrderId, Timestamp};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

#[derive(Debug)]
pub struct CafeState {
    catalog: MenuCatalog,
    queue: OrderQueue,
    ledger: CompletionLedger,
    rng: StdRng,
    operating: bool,
    accuracy: AccuracyPolicy,
    tolerance_seconds: f64,
}

impl CafeState {
    /// Builds the state. A `seed` makes generation reproducible; without one the RNG is
    /// seeded from the OS.
    pub fn new(settings: QueueSettings, catalog: MenuCatalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            catalog,
            queue: OrderQueue::new(settings.gate, settings.prediction),
            ledger: CompletionLedger::new(settings.early_completions),
            rng,
            operating: settings.start_operating,
            accuracy: settings.accuracy,
            tolerance_seconds: settings.tolerance_seconds,
        }
    }

    pub fn is_operating(&self) -> bool {
        self.operating
    }

    pub fn queue(&self) -> &OrderQueue {
        &self.queue
    }

    pub fn ledger(&self) -> &CompletionLedger {
        &self.ledger
    }

    /// At most one generation attempt, then the pending orders in queue order.
    pub fn poll(&mut self, now: Timestamp) -> Vec<Order> {
        if self.operating {
            self.queue.generate(now, &self.catalog, &mut self.rng);
        }
        self.queue.pending().to_vec()
    }

    /// Sets the operating flag. Returns whether it was already set.
    pub fn start(&mut self) -> bool {
        let was_operating = std::mem::replace(&mut self.operating, true);
        if was_operating {
            debug!("Already operating");
        } else {
            info!("Order generation started");
        }
        was_operating
    }

    pub fn delay(&mut self, order_id: OrderId, minutes: i64) -> Result<Timestamp, QueueError> {
        self.queue.delay(order_id, minutes)
    }

    /// Completes an order and files its record in the ledger (subject to the ledger's
    /// early-completion policy). The record is returned either way.
    pub fn complete(
        &mut self,
        order_id: OrderId,
        now: Timestamp,
    ) -> Result<CompletionRecord, QueueError> {
        let (_, record) = self.queue.complete(order_id, now)?;
        self.ledger.append(record.clone());
        Ok(record)
    }

    pub fn summarize(&self) -> Summary {
        summarize(self.ledger.records(), self.accuracy, self.tolerance_seconds)
    }
}

#[async_trait]
impl ActorEntity for CafeState {
    type Action = QueueAction;
    type ActionResult = QueueActionResult;
    type Snapshot = CafeSnapshot;
    type Context = SharedClock;
    type Error = QueueError;

    fn snapshot(&self) -> CafeSnapshot {
        CafeSnapshot {
            operating: self.operating,
            pending: self.queue.len(),
            completed: self.ledger.len(),
            next_id: self.queue.next_id(),
        }
    }

    async fn on_start(&mut self, clock: &SharedClock) -> Result<(), QueueError> {
        info!(
            operating = self.operating,
            menus = self.catalog.len(),
            now = %clock.now(),
            "Café open"
        );
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: QueueAction,
        clock: &SharedClock,
    ) -> Result<QueueActionResult, QueueError> {
        match action {
            QueueAction::Poll => Ok(QueueActionResult::Poll(self.poll(clock.now()))),
            QueueAction::Start => Ok(QueueActionResult::Start(self.start())),
            QueueAction::Delay { order_id, minutes } => self
                .delay(order_id, minutes)
                .map(QueueActionResult::Delay),
            QueueAction::Complete { order_id } => self
                .complete(order_id, clock.now())
                .map(QueueActionResult::Complete),
            QueueAction::Summarize => Ok(QueueActionResult::Summarize(self.summarize())),
        }
    }

    async fn on_stop(&self, _clock: &SharedClock) {
        info!(
            pending = self.queue.len(),
            completed = self.ledger.len(),
            "Café closed"
        );
    }
}
