use actor_framework::{ActorClient, ActorEntity, EntityActor, EntityClient, FrameworkError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Debug, Default)]
struct Register {
    values: Vec<i32>,
}

#[derive(Debug)]
enum RegisterAction {
    Push(i32),
    ShiftFrom { index: usize, by: i32 },
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum RegisterError {
    #[error("index {0} out of range")]
    OutOfRange(usize),
}

struct StopFlag(Arc<AtomicBool>);

#[async_trait]
impl ActorEntity for Register {
    type Action = RegisterAction;
    type ActionResult = usize;
    type Snapshot = Vec<i32>;
    type Context = StopFlag;
    type Error = RegisterError;

    fn snapshot(&self) -> Vec<i32> {
        self.values.clone()
    }

    async fn handle_action(
        &mut self,
        action: RegisterAction,
        _ctx: &StopFlag,
    ) -> Result<usize, RegisterError> {
        match action {
            RegisterAction::Push(v) => {
                self.values.push(v);
                Ok(self.values.len())
            }
            RegisterAction::ShiftFrom { index, by } => {
                if index >= self.values.len() {
                    return Err(RegisterError::OutOfRange(index));
                }
                for v in self.values.iter_mut().skip(index) {
                    *v += by;
                }
                Ok(self.values.len() - index)
            }
        }
    }

    async fn on_stop(&self, ctx: &StopFlag) {
        ctx.0.store(true, Ordering::SeqCst);
    }
}

struct RegisterClient {
    inner: EntityClient<Register>,
}

#[async_trait]
impl ActorClient<Register> for RegisterClient {
    type Error = String;

    fn inner(&self) -> &EntityClient<Register> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> String {
        e.to_string()
    }
}

// --- Test ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let stopped = Arc::new(AtomicBool::new(false));
    let (actor, client) = EntityActor::new(Register::default(), 4);
    let handle = tokio::spawn(actor.run(StopFlag(stopped.clone())));

    for v in [1, 2, 3] {
        client.perform_action(RegisterAction::Push(v)).await.unwrap();
    }

    let shifted = client
        .perform_action(RegisterAction::ShiftFrom { index: 1, by: 10 })
        .await
        .unwrap();
    assert_eq!(shifted, 2);

    let typed = RegisterClient {
        inner: client.clone(),
    };
    assert_eq!(typed.snapshot().await.unwrap(), vec![1, 12, 13]);

    // Entity errors come back boxed and can be recovered
    let err = client
        .perform_action(RegisterAction::ShiftFrom { index: 9, by: 1 })
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_entity::<RegisterError>().unwrap(),
        RegisterError::OutOfRange(9)
    );

    // A failed action leaves state untouched
    assert_eq!(client.snapshot().await.unwrap(), vec![1, 12, 13]);

    drop(typed);
    drop(client);
    handle.await.unwrap();
    assert!(stopped.load(Ordering::SeqCst), "on_stop should run on shutdown");
}

#[tokio::test]
async fn test_concurrent_clients_are_serialized() {
    let (actor, client) = EntityActor::new(Register::default(), 2);
    let handle = tokio::spawn(actor.run(StopFlag(Arc::new(AtomicBool::new(false)))));

    let mut tasks = Vec::new();
    for v in 0..20 {
        let c = client.clone();
        tasks.push(tokio::spawn(async move {
            c.perform_action(RegisterAction::Push(v)).await
        }));
    }

    let mut lengths = Vec::new();
    for t in tasks {
        lengths.push(t.await.unwrap().unwrap());
    }
    lengths.sort_unstable();
    assert_eq!(lengths, (1..=20).collect::<Vec<_>>());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = EntityActor::new(Register::default(), 1);
    drop(actor);

    assert!(client.is_closed());
    let result = client.snapshot().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
