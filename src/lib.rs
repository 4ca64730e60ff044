//! # Café Queue
//!
//! > **A simulated café drink line with completion-time predictions.**
//!
//! Orders arrive on a timer, each with one to three drinks. The café predicts when each order
//! will be ready, staff may push an order back (everything behind it moves too), and completed
//! orders are scored against their prediction.
//!
//! ## 🏗️ Design
//!
//! All mutable state lives in one [`CafeState`](order_actor::CafeState) value owned by a single
//! actor task (see the `actor-framework` crate). Requests are processed one at a time, so a
//! delay cascade can never interleave with a completion or a new order, and no lock guards the
//! queue.
//!
//! ## 🕒 The Timing Model
//!
//! - **Prediction**: a new order starts brewing when the order in front is predicted to finish,
//!   or now if that is already past. Its prediction is that start plus the brew time of every
//!   drink. See [`OrderQueue::enqueue`](order_actor::OrderQueue::enqueue).
//! - **Delay**: shifting an order by `n` minutes shifts every order behind it by `n` minutes.
//!   Orders in front are untouched. See [`OrderQueue::delay`](order_actor::OrderQueue::delay).
//! - **Accuracy**: an order finished `d` seconds off its prediction scores
//!   `max(0, 1 - |d| / 180)`. See [`summary`](order_actor::summary).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Domain ([`model`], [`order_actor`])
//! Menu catalog, orders and completion records; the queue, ledger and summary; the actor
//! entity tying them together.
//!
//! ### 2. The Interface ([`clients`])
//! [`QueueClient`](clients::QueueClient) wraps the generic actor client in typed methods.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! [`CafeSystem`](lifecycle::CafeSystem) spawns the actor with its clock and shuts it down.
//!
//! ### 4. The Edges ([`config`], [`clock`], [`http`])
//! Command-line settings, the injectable time source, and the axum routes.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Serve on :8000, start generating immediately
//! RUST_LOG=info cargo run -- --auto-start
//!
//! curl localhost:8000/orders
//! curl -X POST 'localhost:8000/delay?order_id=1&minutes=2'
//! curl -X POST 'localhost:8000/complete?order_id=1'
//! curl localhost:8000/summary
//! ```

pub mod clients;
pub mod clock;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
