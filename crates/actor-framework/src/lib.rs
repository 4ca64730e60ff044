//! # Actor Framework
//!
//! Building blocks for single-owner actors on Tokio. One [`EntityActor`] owns one piece of
//! state (the entity) and processes requests strictly in arrival order. Callers never touch
//! the state directly; they hold an [`EntityClient`] and exchange messages with the actor.
//!
//! ## Why an actor instead of a lock?
//!
//! - Operations that touch many records at once (for example shifting every item behind a
//!   given position) run as one message and are never interleaved with another writer.
//! - Hooks may await injected dependencies without holding a lock across the await.
//! - Clients are cheap to clone and hand to request handlers.
//!
//! ## Minimal Entity
//!
//! ```rust
//! use actor_framework::{ActorEntity, EntityActor};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct Stack { items: Vec<u32> }
//!
//! #[derive(Debug)]
//! enum StackAction { Push(u32), Pop }
//!
//! #[derive(Debug, thiserror::Error)]
//! enum StackError {
//!     #[error("stack is empty")]
//!     Empty,
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Stack {
//!     type Action = StackAction;
//!     type ActionResult = Option<u32>;
//!     type Snapshot = Vec<u32>;
//!     type Context = ();
//!     type Error = StackError;
//!
//!     fn snapshot(&self) -> Vec<u32> { self.items.clone() }
//!
//!     async fn handle_action(&mut self, action: StackAction, _: &()) -> Result<Option<u32>, StackError> {
//!         match action {
//!             StackAction::Push(v) => { self.items.push(v); Ok(None) }
//!             StackAction::Pop => self.items.pop().map(Some).ok_or(StackError::Empty),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = EntityActor::new(Stack { items: vec![] }, 16);
//!     let handle = tokio::spawn(actor.run(()));
//!
//!     client.perform_action(StackAction::Push(7)).await.unwrap();
//!     assert_eq!(client.snapshot().await.unwrap(), vec![7]);
//!
//!     assert_eq!(client.perform_action(StackAction::Pop).await.unwrap(), Some(7));
//!     let err = client.perform_action(StackAction::Pop).await.unwrap_err();
//!     assert!(matches!(err.downcast_entity::<StackError>(), Ok(StackError::Empty)));
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies go into `run(context)`, not `new()`. An actor can be created, its client
//! handed around, and only then started with the clock or other clients it needs.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers client requests from scripted expectations, so code built on
//! top of a client can be tested without a running entity.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::EntityActor;
pub use client::EntityClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{EntityRequest, Response};
