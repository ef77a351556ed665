//! # Resource Server
//!
//! > **In-memory CRUD resources behind a small REST API.**
//!
//! Each resource (users, inventory items) lives in its own store, owned by a
//! single Tokio task. HTTP handlers never touch the data directly: they send a
//! request over a channel and await the reply.
//!
//! ## Core Concepts
//!
//! ### One owner per store
//! A [`ResourceActor`](framework::ResourceActor) holds the records and the id
//! generator. It processes requests one at a time, so concurrent HTTP calls
//! are serialized without a `Mutex` and no update is ever lost.
//!
//! ### Generics: `T: ActorEntity`
//! The request loop is written once. A resource only supplies its payload
//! types and hooks (validation, update rules, filters) through
//! [`ActorEntity`](framework::ActorEntity).
//!
//! ### Typed errors
//! Each resource has its own error enum ([`UserError`](user_actor::UserError),
//! [`InventoryError`](inventory_actor::InventoryError)). The HTTP layer maps them
//! onto status codes in [`ApiError`](api::ApiError).
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic store actor, its client and a [`MockClient`](framework::mock::MockClient)
//! for tests.
//!
//! ### 2. The Resources ([`model`], [`user_actor`], [`inventory_actor`])
//! Record types and their `ActorEntity` implementations.
//!
//! ### 3. The Interface ([`clients`])
//! [`UserClient`](clients::UserClient) and [`InventoryClient`](clients::InventoryClient)
//! wrap the generic client and speak in resource errors.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`ResourceSystem`](lifecycle::ResourceSystem) spawns the stores and shuts
//! them down; [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ### 5. The Edge ([`api`], [`config`])
//! The axum router and the environment-driven configuration.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on 0.0.0.0:8000 with info logs
//! cargo run
//!
//! # Another port, full payloads in the logs
//! PORT=9000 RUST_LOG=debug cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod framework;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod user_actor;
