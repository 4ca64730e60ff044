use crate::clients::QueueClient;
use crate::clock::{SharedClock, SystemClock};
use crate::config::CafeConfig;
use crate::error::CafeError;
use crate::model::MenuCatalog;
use crate::order_actor::QueueSettings;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running café: one actor task and the client that talks to it.
///
/// # Example
///
/// ```ignore
/// let system = CafeSystem::from_config(&config);
///
/// system.queue_client.start().await?;
/// let pending = system.queue_client.poll().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    /// Client for the café actor. Clone it freely; the actor lives until every clone is gone.
    pub queue_client: QueueClient,

    handle: JoinHandle<()>,
}

impl CafeSystem {
    /// Spawns the café actor with the standard menu and the given clock.
    pub fn new(
        settings: QueueSettings,
        seed: Option<u64>,
        channel_capacity: usize,
        clock: SharedClock,
    ) -> Self {
        let (actor, queue_client) =
            crate::order_actor::new(settings, MenuCatalog::standard(), seed, channel_capacity);

        // The clock is injected at run time, not construction time.
        let handle = tokio::spawn(actor.run(clock));

        Self {
            queue_client,
            handle,
        }
    }

    /// Spawns the café actor on the wall clock in the configured zone.
    pub fn from_config(config: &CafeConfig) -> Self {
        let clock: SharedClock = Arc::new(SystemClock::new(config.offset));
        Self::new(
            config.settings.clone(),
            config.seed,
            config.channel_capacity,
            clock,
        )
    }

    /// Gracefully shuts the café down.
    ///
    /// Dropping the client closes the channel. The actor finishes whatever is still queued,
    /// logs its final state and exits. Clones of the client held elsewhere (for example by
    /// the HTTP router) must be dropped first or this waits for them.
    pub async fn shutdown(self) -> Result<(), CafeError> {
        info!("Shutting down café...");

        drop(self.queue_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(CafeError::Shutdown(format!("Actor task failed: {:?}", e)));
        }

        info!("Café shutdown complete.");
        Ok(())
    }
}
