//! # ActorClient Trait
//!
//! Common interface for entity-specific clients, adding a default `snapshot` method built on
//! top of a generic `EntityClient`.
use crate::{ActorEntity, EntityClient, FrameworkError};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit the shared read path.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, EntityClient, FrameworkError};
/// use async_trait::async_trait;
///
/// #[derive(Debug)] struct Counter { hits: u32 }
/// #[derive(Debug)] enum CounterAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct CounterError(String);
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Action = CounterAction;
///     type ActionResult = ();
///     type Snapshot = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     fn snapshot(&self) -> u32 { self.hits }
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<(), CounterError> { Ok(()) }
/// }
///
/// struct CounterClient { inner: EntityClient<Counter> }
///
/// #[async_trait]
/// impl ActorClient<Counter> for CounterClient {
///     type Error = CounterError;
///     fn inner(&self) -> &EntityClient<Counter> { &self.inner }
///     fn map_error(e: FrameworkError) -> CounterError { CounterError(e.to_string()) }
/// }
///
/// async fn usage(client: CounterClient) {
///     // snapshot() is provided automatically
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic EntityClient.
    fn inner(&self) -> &EntityClient<T>;

    /// Map framework errors to the entity-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the entity's current read-only view.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
