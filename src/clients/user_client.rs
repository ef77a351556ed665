use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{User, UserCreate, UserFilter, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<UserError>() {
            Ok(user_error) => user_error,
            Err(FrameworkError::NotFound(id)) => UserError::NotFound(id),
            Err(FrameworkError::Conflict(id)) => UserError::AlreadyExists(id),
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.get(id).await
    }

    /// A page of users in creation order.
    pub async fn list_users(&self, skip: usize, limit: usize) -> Result<Vec<User>, UserError> {
        self.list(skip, limit, None).await
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    pub async fn delete_user(&self, id: UserId) -> Result<(), UserError> {
        self.delete(id).await
    }

    /// Number of users, or only those whose `is_active` flag equals `is_active`.
    pub async fn count_users(&self, is_active: Option<bool>) -> Result<usize, UserError> {
        self.count(is_active.map(UserFilter::active)).await
    }

    /// `(total, active)` from one snapshot of the store.
    pub async fn activity_counts(&self) -> Result<(usize, usize), UserError> {
        let tally = self.tally(Some(UserFilter::active(true))).await?;
        Ok((tally.total, tally.matching))
    }
}
