//! Error types for the Inventory actor.

use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The requested item was not found.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// An item with the same id already exists.
    #[error("An existing item already exists: {0}")]
    AlreadyExists(String),

    /// The item data provided is invalid.
    #[error("Item validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
