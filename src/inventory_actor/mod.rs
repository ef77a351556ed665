//! # Inventory Actor
//!
//! Inventory catalogue store. Items keep the id the caller gave them, or get a
//! random v4 UUID, and are searchable by name.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`InventoryItem`]
//! - [`error`] - [`InventoryError`] type
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::InventoryClient;
use crate::framework::ResourceActor;
use crate::model::InventoryItem;
use uuid::Uuid;

/// Creates a new Inventory actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<InventoryItem>, InventoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, Uuid::new_v4);
    let client = InventoryClient::new(generic_client);

    (actor, client)
}
