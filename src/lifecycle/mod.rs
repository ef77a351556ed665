//! Process lifecycle: spawning and stopping the store actors, and log setup.

pub mod resource_system;
pub mod tracing;

pub use resource_system::ResourceSystem;
pub use self::tracing::setup_tracing;
