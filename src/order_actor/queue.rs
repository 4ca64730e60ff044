//! The pending-order queue and its timing model.
//!
//! The queue models a single drink line. Orders are kept in id order and every prediction is
//! made relative to the order in front:
//!
//! - **generate** appends a new order, gated by [`GenerationGate`], and predicts its completion
//!   per [`PredictionPolicy`].
//! - **delay** pushes one order back and cascades the same shift to every order behind it.
//! - **complete** removes an order and produces its [`CompletionRecord`].

use crate::model::{CompletionRecord, MenuCatalog, MenuItem, Order, OrderId, Timestamp};
use crate::order_actor::QueueError;
use chrono::TimeDelta;
use rand::Rng;
use tracing::{debug, info};

/// Decides whether a generation attempt actually produces an order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenerationGate {
    /// Generate when nothing was generated yet, or at least this long has passed since the
    /// last generated order.
    Interval(TimeDelta),
    /// Generate with this probability on every attempt, regardless of timing.
    Probability(f64),
}

impl Default for GenerationGate {
    fn default() -> Self {
        GenerationGate::Interval(TimeDelta::seconds(5))
    }
}

/// How a new order's completion time is predicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionPolicy {
    /// Brewing starts when the last queued order is predicted to finish, or now if that is
    /// already in the past.
    #[default]
    Chained,
    /// Brewing starts now, ignoring the rest of the queue.
    Independent,
}

/// Pending orders in insertion (and therefore id) order.
#[derive(Debug, Clone)]
pub struct OrderQueue {
    orders: Vec<Order>,
    next_id: u64,
    last_generated: Option<Timestamp>,
    gate: GenerationGate,
    prediction: PredictionPolicy,
}

impl Default for OrderQueue {
    fn default() -> Self {
        Self::new(GenerationGate::default(), PredictionPolicy::default())
    }
}

impl OrderQueue {
    pub fn new(gate: GenerationGate, prediction: PredictionPolicy) -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
            last_generated: None,
            gate,
            prediction,
        }
    }

    pub fn pending(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// The id the next generated order will receive.
    pub fn next_id(&self) -> OrderId {
        OrderId(self.next_id)
    }

    pub fn last_generated(&self) -> Option<Timestamp> {
        self.last_generated
    }

    /// One generation attempt. Returns the new order, or `None` when the gate is closed.
    /// A closed gate leaves the queue untouched.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        now: Timestamp,
        catalog: &MenuCatalog,
        rng: &mut R,
    ) -> Option<Order> {
        if !self.gate_open(now, rng) {
            return None;
        }

        let items = catalog.draw(rng);
        if items.is_empty() {
            return None;
        }

        match self.enqueue(now, &items) {
            Ok(order) => {
                let order = order.clone();
                self.last_generated = Some(now);
                info!(
                    order_id = %order.id,
                    menus = ?order.menus,
                    predicted = %order.predicted_completion,
                    "Order generated"
                );
                Some(order)
            }
            Err(e) => {
                debug!(error = %e, "Generation skipped");
                None
            }
        }
    }

    /// Appends an order for already-drawn menu items and returns it.
    ///
    /// This is the deterministic half of [`generate`](Self::generate). The prediction is
    /// `start + Σ brew_seconds`, where `start` depends on the [`PredictionPolicy`].
    pub fn enqueue(&mut self, now: Timestamp, items: &[MenuItem]) -> Result<&Order, QueueError> {
        let id = OrderId(self.next_id);
        let brew_total: i64 = items.iter().map(|item| i64::from(item.brew_seconds)).sum();

        let start = match (self.prediction, self.orders.last()) {
            (PredictionPolicy::Chained, Some(last)) => now.max(last.predicted_completion),
            _ => now,
        };
        let predicted = TimeDelta::try_seconds(brew_total)
            .and_then(|d| start.checked_add_signed(d))
            .ok_or(QueueError::OutOfRange(id))?;

        let menus = items.iter().map(|item| item.name.clone()).collect();
        self.orders.push(Order::new(id, menus, now, predicted));
        self.next_id += 1;

        let index = self.orders.len() - 1;
        Ok(&self.orders[index])
    }

    /// Delays an order by `minutes` and shifts every later order by the same amount.
    ///
    /// Orders ahead of the target are untouched. Returns the target's new prediction. Either
    /// every shift applies or none does.
    pub fn delay(&mut self, id: OrderId, minutes: i64) -> Result<Timestamp, QueueError> {
        let index = self.position(id).ok_or(QueueError::NotFound(id))?;
        let shift = TimeDelta::try_minutes(minutes).ok_or(QueueError::OutOfRange(id))?;

        let shifted = self.orders[index..]
            .iter()
            .map(|order| order.predicted_completion.checked_add_signed(shift))
            .collect::<Option<Vec<_>>>()
            .ok_or(QueueError::OutOfRange(id))?;

        for (order, predicted) in self.orders[index..].iter_mut().zip(shifted) {
            order.predicted_completion = predicted;
        }

        let new_predicted = self.orders[index].predicted_completion;
        info!(
            order_id = %id,
            minutes,
            cascaded = self.orders.len() - index - 1,
            predicted = %new_predicted,
            "Delay applied"
        );
        Ok(new_predicted)
    }

    /// Completes a pending order at `now`, removing it from the queue.
    ///
    /// Returns the finished order and its completion record. The same id completed twice
    /// fails with [`QueueError::NotFound`] the second time.
    pub fn complete(
        &mut self,
        id: OrderId,
        now: Timestamp,
    ) -> Result<(Order, CompletionRecord), QueueError> {
        let index = self.position(id).ok_or(QueueError::NotFound(id))?;
        let mut order = self.orders.remove(index);
        order.actual_completion = Some(now);

        let record = CompletionRecord::new(&order, now);
        info!(
            order_id = %id,
            delay_seconds = record.delay_seconds,
            "Order completed {} by {:.1}s",
            completion_log_label(record.delay_seconds),
            record.delay_seconds.abs()
        );

        Ok((order, record))
    }

    fn position(&self, id: OrderId) -> Option<usize> {
        self.orders.iter().position(|order| order.id == id)
    }

    fn gate_open<R: Rng + ?Sized>(&self, now: Timestamp, rng: &mut R) -> bool {
        match self.gate {
            GenerationGate::Interval(interval) => match self.last_generated {
                None => true,
                Some(last) => now - last >= interval,
            },
            GenerationGate::Probability(p) => {
                if p.is_nan() || p <= 0.0 {
                    false
                } else if p >= 1.0 {
                    true
                } else {
                    rng.gen_bool(p)
                }
            }
        }
    }
}

/// Log wording for a completion. An exact hit reads as "late by 0.0s"; the summary label
/// still counts it as early.
fn completion_log_label(delay_seconds: f64) -> &'static str {
    if delay_seconds >= 0.0 {
        "late"
    } else {
        "early"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn t0() -> Timestamp {
        FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
            .unwrap()
    }

    fn at(secs: i64) -> Timestamp {
        t0() + TimeDelta::seconds(secs)
    }

    fn ab_catalog() -> MenuCatalog {
        MenuCatalog::new([("A", 60), ("B", 90)])
    }

    fn item(catalog: &MenuCatalog, name: &str) -> MenuItem {
        catalog.get(name).cloned().unwrap()
    }

    #[test]
    fn enqueue_on_empty_queue_predicts_from_now() {
        let catalog = ab_catalog();
        let mut queue = OrderQueue::default();

        let order = queue
            .enqueue(t0(), &[item(&catalog, "A"), item(&catalog, "B")])
            .unwrap()
            .clone();

        assert_eq!(order.id, OrderId(1));
        assert_eq!(order.menus, vec!["A", "B"]);
        assert_eq!(order.created_at, t0());
        assert_eq!(order.predicted_completion, at(150));
        assert_eq!(queue.next_id(), OrderId(2));
    }

    #[test]
    fn chained_prediction_waits_for_queue_tail() {
        let catalog = ab_catalog();
        let mut queue = OrderQueue::new(GenerationGate::default(), PredictionPolicy::Chained);

        queue.enqueue(t0(), &[item(&catalog, "B")]).unwrap(); // done at +90
        let second = queue.enqueue(at(10), &[item(&catalog, "A")]).unwrap();
        assert_eq!(second.predicted_completion, at(150));

        // Tail already in the past: start from now.
        let third = queue.enqueue(at(500), &[item(&catalog, "A")]).unwrap();
        assert_eq!(third.predicted_completion, at(560));
    }

    #[test]
    fn independent_prediction_ignores_queue() {
        let catalog = ab_catalog();
        let mut queue = OrderQueue::new(GenerationGate::default(), PredictionPolicy::Independent);

        queue.enqueue(t0(), &[item(&catalog, "B")]).unwrap();
        let second = queue.enqueue(at(10), &[item(&catalog, "A")]).unwrap();
        assert_eq!(second.predicted_completion, at(70));
    }

    #[test]
    fn interval_gate_limits_generation() {
        let catalog = MenuCatalog::standard();
        let mut rng = StdRng::seed_from_u64(1);
        let mut queue = OrderQueue::default();

        assert!(queue.generate(t0(), &catalog, &mut rng).is_some());
        assert!(queue.generate(at(4), &catalog, &mut rng).is_none());
        assert_eq!(queue.len(), 1);
        assert!(queue.generate(at(5), &catalog, &mut rng).is_some());
        assert!(queue.generate(at(9), &catalog, &mut rng).is_none());
        assert!(queue.generate(at(11), &catalog, &mut rng).is_some());
        assert_eq!(queue.last_generated(), Some(at(11)));
    }

    #[test]
    fn probability_gate_extremes() {
        let catalog = MenuCatalog::standard();
        let mut rng = StdRng::seed_from_u64(9);

        let mut never = OrderQueue::new(GenerationGate::Probability(0.0), PredictionPolicy::Chained);
        let mut always = OrderQueue::new(GenerationGate::Probability(1.0), PredictionPolicy::Chained);
        for i in 0..20 {
            assert!(never.generate(at(i), &catalog, &mut rng).is_none());
            assert!(always.generate(at(i), &catalog, &mut rng).is_some());
        }
        assert!(never.is_empty());
        assert_eq!(always.len(), 20);
    }

    #[test]
    fn generated_ids_are_gapless_and_chained() {
        let catalog = MenuCatalog::standard();
        let mut rng = StdRng::seed_from_u64(3);
        let mut queue = OrderQueue::new(GenerationGate::Probability(1.0), PredictionPolicy::Chained);

        let mut previous: Option<Order> = None;
        for i in 0..50 {
            let order = queue.generate(at(i * 2), &catalog, &mut rng).unwrap();
            if let Some(prev) = &previous {
                assert_eq!(order.id.0, prev.id.0 + 1);
                assert!(order.predicted_completion >= prev.predicted_completion);
            } else {
                assert_eq!(order.id, OrderId(1));
            }
            previous = Some(order);
        }
    }

    #[test]
    fn delay_cascades_to_later_orders_only() {
        let catalog = ab_catalog();
        let mut queue = OrderQueue::default();
        for i in 0..4 {
            queue.enqueue(at(i), &[item(&catalog, "A")]).unwrap();
        }
        let before: Vec<Timestamp> = queue.pending().iter().map(|o| o.predicted_completion).collect();

        let new_predicted = queue.delay(OrderId(2), 3).unwrap();
        assert_eq!(new_predicted, before[1] + TimeDelta::minutes(3));

        let after: Vec<Timestamp> = queue.pending().iter().map(|o| o.predicted_completion).collect();
        assert_eq!(after[0], before[0]);
        for i in 1..4 {
            assert_eq!(after[i], before[i] + TimeDelta::minutes(3));
        }
    }

    #[test]
    fn delay_shifts_unconditionally_and_accepts_negative_minutes() {
        let catalog = ab_catalog();
        let mut queue = OrderQueue::new(GenerationGate::default(), PredictionPolicy::Independent);
        queue.enqueue(t0(), &[item(&catalog, "A")]).unwrap(); // +60
        queue.enqueue(t0(), &[item(&catalog, "B"), item(&catalog, "B")]).unwrap(); // +180

        queue.delay(OrderId(1), 1).unwrap();
        assert_eq!(queue.get(OrderId(1)).unwrap().predicted_completion, at(120));
        assert_eq!(queue.get(OrderId(2)).unwrap().predicted_completion, at(240));

        queue.delay(OrderId(1), -2).unwrap();
        assert_eq!(queue.get(OrderId(1)).unwrap().predicted_completion, at(0));
        assert_eq!(queue.get(OrderId(2)).unwrap().predicted_completion, at(120));
    }

    #[test]
    fn delay_unknown_order_changes_nothing() {
        let catalog = ab_catalog();
        let mut queue = OrderQueue::default();
        queue.enqueue(t0(), &[item(&catalog, "A")]).unwrap();
        let before = queue.pending().to_vec();

        assert_eq!(queue.delay(OrderId(99), 5), Err(QueueError::NotFound(OrderId(99))));
        assert_eq!(queue.pending(), before.as_slice());
    }

    #[test]
    fn delay_out_of_range_is_atomic() {
        let catalog = ab_catalog();
        let mut queue = OrderQueue::default();
        queue.enqueue(t0(), &[item(&catalog, "A")]).unwrap();
        queue.enqueue(t0(), &[item(&catalog, "A")]).unwrap();
        let before = queue.pending().to_vec();

        assert_eq!(queue.delay(OrderId(1), i64::MAX), Err(QueueError::OutOfRange(OrderId(1))));
        assert_eq!(queue.pending(), before.as_slice());
    }

    #[test]
    fn complete_removes_and_records() {
        let catalog = ab_catalog();
        let mut queue = OrderQueue::default();
        queue.enqueue(t0(), &[item(&catalog, "A")]).unwrap(); // +60
        queue.enqueue(t0(), &[item(&catalog, "A")]).unwrap(); // +120

        let (order, record) = queue.complete(OrderId(2), at(100)).unwrap();
        assert_eq!(order.actual_completion, Some(at(100)));
        assert!(order.is_completed());
        assert_eq!(record.order_id, OrderId(2));
        assert_eq!(record.predicted, at(120));
        assert_eq!(record.delay_seconds, -20.0);

        assert_eq!(queue.len(), 1);
        assert!(queue.get(OrderId(2)).is_none());

        // Second completion of the same id fails.
        assert_eq!(
            queue.complete(OrderId(2), at(130)).unwrap_err(),
            QueueError::NotFound(OrderId(2))
        );
    }

    #[test]
    fn ids_are_not_reused_after_completion() {
        let catalog = ab_catalog();
        let mut queue = OrderQueue::default();
        queue.enqueue(t0(), &[item(&catalog, "A")]).unwrap();
        queue.complete(OrderId(1), at(60)).unwrap();

        let next = queue.enqueue(at(61), &[item(&catalog, "A")]).unwrap();
        assert_eq!(next.id, OrderId(2));
    }

    #[test]
    fn exact_completion_logs_as_late() {
        assert_eq!(completion_log_label(0.0), "late");
        assert_eq!(completion_log_label(12.3), "late");
        assert_eq!(completion_log_label(-0.1), "early");
    }
}
