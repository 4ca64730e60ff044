//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a piece of state must satisfy to be owned by an
//! [`EntityActor`](crate::EntityActor). The actor holds exactly one entity value and hands it
//! every incoming request in turn, so the entity itself never needs interior locking.
//!
//! # Architecture Note
//! Associated types pin the message vocabulary to the entity: an entity that understands
//! `QueueAction` can only ever receive a `QueueAction`, and its caller can only ever get a
//! `QueueActionResult` back. Sending the wrong payload is a compile error.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_start`]
//! - [`ActorEntity::on_stop`]
//!
//! Both default to doing nothing.

use async_trait::async_trait;
use std::fmt::Debug;

/// State that can be owned and driven by an [`EntityActor`](crate::EntityActor).
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await. The `Context` value is handed to the actor
/// in `run()` rather than `new()`, which lets callers wire dependencies (clocks, other clients)
/// after the actor and its client exist.
#[async_trait]
pub trait ActorEntity: Send + Sync + 'static {
    /// Enum of operations the entity understands.
    type Action: Send + Debug;

    /// Result of an action. Usually an enum whose variants mirror `Action` 1:1.
    type ActionResult: Send + Debug;

    /// Read-only view returned by snapshot requests.
    type Snapshot: Send + Debug;

    /// Runtime dependencies injected into every hook. Use `()` if none are needed.
    type Context: Send + Sync;

    /// Error type for this entity.
    ///
    /// One error enum per entity rather than one per action. Clients match on a single type,
    /// at the cost of some variants being impossible for some actions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the read-only view of the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Called once before the first message is processed.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles one action. Requests are delivered strictly one at a time.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Called once after the channel closes and the last message has been handled.
    async fn on_stop(&self, _ctx: &Self::Context) {}
}
