//! # User Actor
//!
//! This module implements the User resource actor: the in-memory store of user
//! records with server-assigned ids.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use resource_server::user_actor;
//! use resource_server::model::UserCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let user = client
//!         .create_user(UserCreate::new("Alice", "alice@example.com"))
//!         .await?;
//!     assert_eq!(user.id, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::{User, UserId};

/// Creates a new User actor and its client.
///
/// Ids start at 1 and are never handed out twice, even after deletions.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let mut last_id: UserId = 0;
    let next_user_id = move || {
        last_id += 1;
        last_id
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_user_id);
    let client = UserClient::new(generic_client);

    (actor, client)
}
