//! # Generic Actor Server
//!
//! This module defines the `EntityActor`, the server half of the actor model. It owns one
//! entity value and processes messages sequentially, so the entity has exclusive access to its
//! own state without any `Mutex` or `RwLock`.

use crate::client::EntityClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::EntityRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single entity.
///
/// # Usage Pattern
///
/// 1.  **Create**: `EntityActor::new(entity, capacity)` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use actor_framework::{ActorEntity, EntityActor};
/// use async_trait::async_trait;
///
/// #[derive(Debug)] struct Counter { hits: u32 }
/// #[derive(Debug)] enum CounterAction { Hit }
/// #[derive(Debug, thiserror::Error)] #[error("never")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Snapshot = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     fn snapshot(&self) -> u32 { self.hits }
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, CounterError> {
///         self.hits += 1;
///         Ok(self.hits)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = EntityActor::new(Counter { hits: 0 }, 8);
///     tokio::spawn(actor.run(()));
///     assert_eq!(client.perform_action(CounterAction::Hit).await.unwrap(), 1);
/// }
/// ```
pub struct EntityActor<T: ActorEntity> {
    receiver: mpsc::Receiver<EntityRequest<T>>,
    entity: T,
    handled: u64,
}

impl<T: ActorEntity> EntityActor<T> {
    /// Creates a new `EntityActor` around `entity` and its associated `EntityClient`.
    ///
    /// `buffer_size` is the channel capacity. When it is full, client calls wait for space.
    pub fn new(entity: T, buffer_size: usize) -> (Self, EntityClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            entity,
            handled: 0,
        };
        (actor, EntityClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// If `on_start` fails the loop never starts. Pending and future requests then observe
    /// [`FrameworkError::ActorClosed`] or [`FrameworkError::ActorDropped`].
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        if let Err(e) = self.entity.on_start(&context).await {
            warn!(entity_type, error = %e, "on_start failed");
            return;
        }
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handled += 1;
            match msg {
                EntityRequest::Snapshot { respond_to } => {
                    debug!(entity_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.entity.snapshot()));
                }
                EntityRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let result = self
                        .entity
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => debug!(entity_type, "Action ok"),
                        Err(e) => warn!(entity_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        self.entity.on_stop(&context).await;
        info!(entity_type, handled = self.handled, "Shutdown");
    }
}
