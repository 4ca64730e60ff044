use crate::model::{CompletionRecord, Order, OrderId, Timestamp};
use crate::order_actor::{CafeState, QueueAction, QueueActionResult, QueueError, Summary};
use actor_framework::{ActorClient, EntityClient, FrameworkError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the café actor.
///
/// Every method is one request to the actor. Domain failures come back as the matching
/// [`QueueError`] variant. A closed or crashed actor surfaces as
/// [`QueueError::ActorCommunicationError`].
#[derive(Clone)]
pub struct QueueClient {
    inner: EntityClient<CafeState>,
}

impl QueueClient {
    pub fn new(inner: EntityClient<CafeState>) -> Self {
        Self { inner }
    }

    /// Runs one generation attempt and returns the pending orders.
    #[instrument(skip(self))]
    pub async fn poll(&self) -> Result<Vec<Order>, QueueError> {
        match self.send(QueueAction::Poll).await? {
            QueueActionResult::Poll(orders) => Ok(orders),
            other => Err(unexpected(other)),
        }
    }

    /// Turns order generation on. Returns whether it was already on.
    #[instrument(skip(self))]
    pub async fn start(&self) -> Result<bool, QueueError> {
        match self.send(QueueAction::Start).await? {
            QueueActionResult::Start(was_operating) => Ok(was_operating),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delay(&self, order_id: OrderId, minutes: i64) -> Result<Timestamp, QueueError> {
        match self.send(QueueAction::Delay { order_id, minutes }).await? {
            QueueActionResult::Delay(predicted) => Ok(predicted),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn complete(&self, order_id: OrderId) -> Result<CompletionRecord, QueueError> {
        match self.send(QueueAction::Complete { order_id }).await? {
            QueueActionResult::Complete(record) => Ok(record),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn summarize(&self) -> Result<Summary, QueueError> {
        match self.send(QueueAction::Summarize).await? {
            QueueActionResult::Summarize(summary) => Ok(summary),
            other => Err(unexpected(other)),
        }
    }

    async fn send(&self, action: QueueAction) -> Result<QueueActionResult, QueueError> {
        debug!("Sending request");
        self.inner
            .perform_action(action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: QueueActionResult) -> QueueError {
    QueueError::ActorCommunicationError(format!("Unexpected response: {:?}", result))
}

#[async_trait]
impl ActorClient<CafeState> for QueueClient {
    type Error = QueueError;

    fn inner(&self) -> &EntityClient<CafeState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<QueueError>() {
            Ok(domain) => domain,
            Err(other) => QueueError::ActorCommunicationError(other.to_string()),
        }
    }
}
