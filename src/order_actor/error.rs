//! Error types for the café order queue.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during queue operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueueError {
    /// No pending order carries this id. Completed orders are no longer pending.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// Shifting or predicting a time for this order would leave the representable range.
    #[error("Predicted time out of range for {0}")]
    OutOfRange(OrderId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for QueueError {
    fn from(msg: String) -> Self {
        QueueError::ActorCommunicationError(msg)
    }
}
