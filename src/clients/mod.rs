//! Type-safe wrappers around [`EntityClient`](actor_framework::EntityClient).

pub mod queue_client;

pub use queue_client::*;
