//! # Generic Messages
//!
//! Message types exchanged between an [`EntityClient`](crate::EntityClient) and its
//! [`EntityActor`](crate::EntityActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to an actor.
///
/// - **Snapshot**: read the entity's current view without mutating it.
/// - **Action**: run one entity-specific operation, possibly mutating state.
///
/// Generic over `T: ActorEntity`, so the payload and reply types always match the entity.
#[derive(Debug)]
pub enum EntityRequest<T: ActorEntity> {
    Snapshot {
        respond_to: Response<T::Snapshot>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
