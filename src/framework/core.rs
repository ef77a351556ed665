//! # Core Actor Framework
//!
//! This module defines the generic building blocks of the resource store.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all resource types must implement.
//! - [`ResourceActor`]: The generic actor that owns a collection of entities.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound, Conflict).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks)
// =============================================================================

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our resource types (User, InventoryItem)
/// must satisfy, we can write the `ResourceActor` logic *once* and reuse it everywhere.
///
/// Associated types keep every operation typed: a `User` actor only accepts a `UserCreate`
/// payload, and an inventory actor can't be handed one by mistake.
///
/// # Provided Methods (Hooks)
/// - [`ActorEntity::requested_id`]
/// - [`ActorEntity::validate_create`]
/// - [`ActorEntity::on_delete`]
/// - [`ActorEntity::matches`]
///
/// The defaults accept everything.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., u64, Uuid).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Criteria used by `List` and `Count` to select a subset of entities.
    type Filter: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// One error enum covers every hook of the entity, so clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Identifier chosen by the caller, if the payload carries one.
    ///
    /// When this returns `None` the actor draws the next id from its generator.
    fn requested_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Validates a create payload against the entities already stored.
    ///
    /// Runs before an id is drawn, so a rejected payload never consumes an id.
    fn validate_create<'a, I>(_params: &Self::Create, _existing: I) -> Result<(), Self::Error>
    where
        I: Iterator<Item = &'a Self>,
        Self: 'a,
    {
        Ok(())
    }

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Applies an update. Implementations validate before mutating so that a
    /// rejected update leaves the entity untouched.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Whether this entity is selected by `filter`.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type when this error carries one;
    /// any other error is handed back unchanged.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(err) => match err.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(err) => Err(FrameworkError::EntityError(err)),
            },
            other => Err(other),
        }
    }
}

/// Store size and the number of entities matching a filter, taken in one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub total: usize,
    pub matching: usize,
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly onto the lifecycle of a stored resource:
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get (Read)**: Fetches the current state of the resource by ID.
/// - **List / Count (Read)**: Ordered, paginated and filtered views over the whole store.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Lifecycle end. Removes the resource.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        skip: usize,
        limit: usize,
        filter: Option<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Count {
        filter: Option<T::Filter>,
        respond_to: Response<Tally>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the store needs
/// no `Mutex` or `RwLock`. Concurrent HTTP requests are serialized through the channel,
/// which rules out lost updates.
///
/// `order` records insertion order for `List`; ids are only ever appended or removed.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id_fn: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel; callers wait when it is full.
    /// * `next_id_fn` - id generator, invoked once per successful create that did not
    ///   request its own id.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params);
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Create failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List {
                    skip,
                    limit,
                    filter,
                    respond_to,
                } => {
                    let items: Vec<T> = self
                        .ordered()
                        .filter(|item| filter.as_ref().map_or(true, |f| item.matches(f)))
                        .skip(skip)
                        .take(limit)
                        .cloned()
                        .collect();
                    debug!(entity_type, skip, limit, ?filter, returned = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Count { filter, respond_to } => {
                    let total = self.store.len();
                    let matching = match &filter {
                        Some(f) => self.store.values().filter(|item| item.matches(f)).count(),
                        None => total,
                    };
                    debug!(entity_type, ?filter, total, matching, "Count");
                    let _ = respond_to.send(Ok(Tally { total, matching }));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete() {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        self.order.retain(|stored| stored != &id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, params: T::Create) -> Result<T, FrameworkError> {
        T::validate_create(&params, self.store.values())
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        let id = match T::requested_id(&params) {
            Some(id) if self.store.contains_key(&id) => {
                return Err(FrameworkError::Conflict(id.to_string()));
            }
            Some(id) => id,
            None => (self.next_id_fn)(),
        };

        let item = T::from_create_params(id.clone(), params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        self.store.insert(id.clone(), item.clone());
        self.order.push(id.clone());
        info!(entity_type = entity_type::<T>(), %id, size = self.store.len(), "Created");
        Ok(item)
    }

    fn ordered(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.store.get(id))
    }
}

/// Just the type name (e.g., "User" instead of "resource_server::model::user::User").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender, so cloning is cheap; every clone talks to the same store.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(
        &self,
        skip: usize,
        limit: usize,
        filter: Option<T::Filter>,
    ) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List {
            skip,
            limit,
            filter,
            respond_to,
        })
        .await
    }

    pub async fn count(&self, filter: Option<T::Filter>) -> Result<usize, FrameworkError> {
        Ok(self.tally(filter).await?.matching)
    }

    /// Store size and matching count from the same snapshot.
    pub async fn tally(&self, filter: Option<T::Filter>) -> Result<Tally, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Count { filter, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
