//! Generic actor framework for resource management.
//!
//! This module provides the building blocks for type-safe, task-owned stores
//! of resource entities with CRUD, list and count operations.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the entities
//! - [`ResourceClient`] - Typed handle used to talk to a running actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
