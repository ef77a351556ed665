//! Shared state handed to every handler.

use std::time::Instant;

use crate::clients::{InventoryClient, UserClient};
use crate::lifecycle::ResourceSystem;

/// Application state. Cloned per request; the clients are channel handles.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub inventory: InventoryClient,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(users: UserClient, inventory: InventoryClient) -> Self {
        Self {
            users,
            inventory,
            started_at: Instant::now(),
        }
    }

    /// State backed by the clients of a running system.
    pub fn from_system(system: &ResourceSystem) -> Self {
        Self::new(system.user_client.clone(), system.inventory_client.clone())
    }

    /// Seconds since the state was created.
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
