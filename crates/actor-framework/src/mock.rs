//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`EntityClient<T>`] whose requests are answered from a queue
//! of scripted expectations instead of a running entity. Code that talks to an actor through a
//! client (typed client wrappers, HTTP handlers) can be tested without spawning the actor.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, replies are scripted | Real state transitions |
//! | **Error Injection** | Easy (`return_err`) | Needs the right state |
//! | **Use Case** | Logic *around* the client | The entity itself, full system |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)] struct Counter { hits: u32 }
//! #[derive(Debug)] enum CounterAction { Hit }
//! #[derive(Debug, thiserror::Error)] #[error("never")] struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Action = CounterAction; type ActionResult = u32; type Snapshot = u32;
//!     type Context = (); type Error = CounterError;
//!     fn snapshot(&self) -> u32 { self.hits }
//!     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, CounterError> { Ok(0) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Counter>::new();
//!     mock.expect_action().return_ok(41);
//!     mock.expect_snapshot().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.perform_action(CounterAction::Hit).await.unwrap(), 41);
//!     assert!(matches!(client.snapshot().await, Err(FrameworkError::ActorClosed)));
//!
//!     assert_eq!(mock.take_actions().len(), 1);
//!     mock.verify();
//! }
//! ```
//!
//! Use [`create_mock_client`] plus [`expect_action`] when a test needs to inspect the request
//! and answer it by hand.

use crate::client::EntityClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::EntityRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ActorEntity> {
    Snapshot(Result<T::Snapshot, FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    actions: Vec<T::Action>,
    unexpected: usize,
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: EntityClient<T>,
    state: Arc<Mutex<MockState<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<EntityRequest<T>>(100);
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            actions: Vec::new(),
            unexpected: 0,
        }));
        let shared = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
                let expectation = guard.expectations.pop_front();

                match (request, expectation) {
                    (EntityRequest::Snapshot { respond_to }, Some(Expectation::Snapshot(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (EntityRequest::Action { action, respond_to }, Some(Expectation::Action(r))) => {
                        guard.actions.push(action);
                        let _ = respond_to.send(r);
                    }
                    (EntityRequest::Action { action, .. }, _) => {
                        // The responder is dropped so the caller sees ActorDropped.
                        guard.actions.push(action);
                        guard.unexpected += 1;
                    }
                    (EntityRequest::Snapshot { .. }, _) => {
                        guard.unexpected += 1;
                    }
                }
            }
        });

        Self {
            client: EntityClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> EntityClient<T> {
        self.client.clone()
    }

    /// Expects a snapshot request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Expects an action request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Drains the actions received so far, in arrival order.
    pub fn take_actions(&self) -> Vec<T::Action> {
        std::mem::take(&mut self.state.lock().unwrap_or_else(PoisonError::into_inner).actions)
    }

    /// Panics unless every expectation was consumed and nothing unexpected arrived.
    pub fn verify(&self) {
        let guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.unexpected > 0 {
            panic!("{} unexpected request(s) reached the mock", guard.unexpected);
        }
        if !guard.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                guard.expectations.len()
            );
        }
    }
}

/// Builder for snapshot expectations.
pub struct SnapshotExpectationBuilder<T: ActorEntity> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: ActorEntity> SnapshotExpectationBuilder<T> {
    pub fn return_ok(self, value: T::Snapshot) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Snapshot, FrameworkError>) {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        guard.expectations.push_back(Expectation::Snapshot(response));
    }
}

/// Builder for action expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    /// Replies with a boxed entity error, as a real actor would when `handle_action` fails.
    pub fn return_entity_err(self, error: T::Error) {
        self.push(Err(FrameworkError::EntityError(Box::new(error))));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        guard.expectations.push_back(Expectation::Action(response));
    }
}

/// Creates a client and the raw receiver behind it.
///
/// The test drives the receiver itself, inspecting each request and replying by hand.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (EntityClient<T>, mpsc::Receiver<EntityRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (EntityClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<EntityRequest<T>>,
) -> Option<(
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(EntityRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Tally {
        total: i64,
    }

    #[derive(Debug, PartialEq)]
    enum TallyAction {
        Add(i64),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tally error")]
    struct TallyError;

    #[async_trait]
    impl ActorEntity for Tally {
        type Action = TallyAction;
        type ActionResult = i64;
        type Snapshot = i64;
        type Context = ();
        type Error = TallyError;

        fn snapshot(&self) -> i64 {
            self.total
        }

        async fn handle_action(&mut self, action: TallyAction, _: &()) -> Result<i64, TallyError> {
            let TallyAction::Add(n) = action;
            self.total += n;
            Ok(self.total)
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Tally>(4);

        let task = tokio::spawn(async move { client.perform_action(TallyAction::Add(3)).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, TallyAction::Add(3));
        responder.send(Ok(3)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Tally>::new();
        mock.expect_action().return_ok(10);
        mock.expect_snapshot().return_ok(10);
        mock.expect_action().return_entity_err(TallyError);

        let client = mock.client();
        assert_eq!(client.perform_action(TallyAction::Add(10)).await.unwrap(), 10);
        assert_eq!(client.snapshot().await.unwrap(), 10);

        let err = client.perform_action(TallyAction::Add(1)).await.unwrap_err();
        assert!(err.downcast_entity::<TallyError>().is_ok());

        assert_eq!(
            mock.take_actions(),
            vec![TallyAction::Add(10), TallyAction::Add(1)]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_drops_responder() {
        let mock = MockClient::<Tally>::new();
        let client = mock.client();

        let result = client.snapshot().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
