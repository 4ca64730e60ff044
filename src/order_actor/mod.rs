//! The café order queue: timing model, ledger, summary, and the actor that owns them.

mod actions;
pub mod entity;
pub mod error;
pub mod ledger;
pub mod queue;
mod settings;
pub mod summary;

pub use actions::*;
pub use entity::CafeState;
pub use error::*;
pub use ledger::{CompletionLedger, EarlyCompletionPolicy};
pub use queue::{GenerationGate, OrderQueue, PredictionPolicy};
pub use settings::QueueSettings;
pub use summary::{AccuracyPolicy, Summary, SummaryLine, SummaryReport};

use crate::clients::QueueClient;
use crate::model::MenuCatalog;
use actor_framework::EntityActor;

/// Creates the café actor and its client. The actor does nothing until `run` is spawned with
/// a clock.
pub fn new(
    settings: QueueSettings,
    catalog: MenuCatalog,
    seed: Option<u64>,
    channel_capacity: usize,
) -> (EntityActor<CafeState>, QueueClient) {
    let state = CafeState::new(settings, catalog, seed);
    let (actor, generic_client) = EntityActor::new(state, channel_capacity);
    let client = QueueClient::new(generic_client);

    (actor, client)
}
