use crate::framework::{ActorEntity, FrameworkError, ResourceClient, Tally};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read and delete operations.
///
/// Implementors supply the inner [`ResourceClient`] and the mapping from
/// [`FrameworkError`] into their own error type; `get`, `list`, `count` and
/// `delete` come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID. An absent entity is a `NotFound` error.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        let missing = FrameworkError::NotFound(id.to_string());
        match self.inner().get(id).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(Self::map_error(missing)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Page through entities in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(
        &self,
        skip: usize,
        limit: usize,
        filter: Option<T::Filter>,
    ) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .list(skip, limit, filter)
            .await
            .map_err(Self::map_error)
    }

    /// Count entities, optionally only those matching `filter`.
    #[tracing::instrument(skip(self))]
    async fn count(&self, filter: Option<T::Filter>) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().count(filter).await.map_err(Self::map_error)
    }

    /// Store size and the count matching `filter`, read in a single actor turn.
    #[tracing::instrument(skip(self))]
    async fn tally(&self, filter: Option<T::Filter>) -> Result<Tally, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().tally(filter).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
