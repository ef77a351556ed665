use crate::clients::{InventoryClient, UserClient};
use crate::config::StoreConfig;
use tracing::{error, info};

/// The runtime orchestrator for the resource stores.
///
/// `ResourceSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping every store actor
/// - **Handing out clients**: The HTTP layer only ever sees the clients
///
/// # Architecture
///
/// The system runs two independent actors:
/// - **User Actor**: User records with sequential ids
/// - **Inventory Actor**: Inventory items keyed by UUID
///
/// # Example
///
/// ```ignore
/// let system = ResourceSystem::new(&StoreConfig::default());
///
/// let user = system.user_client.create_user(UserCreate::new("Ada", "ada@example.com")).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ResourceSystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Client for interacting with the Inventory actor
    pub inventory_client: InventoryClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ResourceSystem {
    /// Spawns every store actor on the current Tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn new(config: &StoreConfig) -> Self {
        let (user_actor, user_client) = crate::user_actor::new(config.buffer_size);
        let (inventory_actor, inventory_client) = crate::inventory_actor::new(config.buffer_size);

        let user_handle = tokio::spawn(user_actor.run());
        let inventory_handle = tokio::spawn(inventory_actor.run());

        Self {
            user_client,
            inventory_client,
            handles: vec![user_handle, inventory_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor drains what is
    /// already queued and leaves its loop. Clones handed out earlier (e.g. to
    /// the router) must be dropped first or this waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.user_client);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
