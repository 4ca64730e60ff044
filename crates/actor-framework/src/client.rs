//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::EntityRequest;
use tokio::sync::{mpsc, oneshot};

/// ## EntityClient
///
/// Type-safe async handle to an [`EntityActor`](crate::EntityActor). Requests go over a Tokio
/// mpsc channel and replies come back on a oneshot. Holds only a sender, so clones are cheap and
/// can be shared across tasks. The actor stops once every clone is dropped.
pub struct EntityClient<T: ActorEntity> {
    sender: mpsc::Sender<EntityRequest<T>>,
}

impl<T: ActorEntity> Clone for EntityClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> EntityClient<T> {
    pub fn new(sender: mpsc::Sender<EntityRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn snapshot(&self) -> Result<T::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EntityRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EntityRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// True once the actor's receiver has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
