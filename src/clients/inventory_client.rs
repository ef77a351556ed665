use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::inventory_actor::InventoryError;
use crate::model::{InventoryItem, InventoryItemCreate, InventorySearch};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryItem>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, item), fields(name = %item.name))]
    pub async fn add_item(&self, item: InventoryItemCreate) -> Result<InventoryItem, InventoryError> {
        debug!(?item, "add_item called");
        self.inner.create(item).await.map_err(Self::map_error)
    }

    /// Items whose name contains `term` (any case), or every item when `term` is `None`.
    pub async fn search_items(
        &self,
        term: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        let filter = term.filter(|t| !t.is_empty()).map(InventorySearch::new);
        self.list(skip, limit, filter).await
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<InventoryError>() {
            Ok(inventory_error) => inventory_error,
            Err(FrameworkError::NotFound(id)) => InventoryError::NotFound(id),
            Err(FrameworkError::Conflict(id)) => InventoryError::AlreadyExists(id),
            Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
