//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod inventory;
pub mod user;

pub use inventory::*;
pub use user::*;
