//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the server.
//!
//! ## Configuration
//!
//! `RUST_LOG` wins when it is set; otherwise the level from `LOG_LEVEL`
//! (see [`LoggingConfig`](crate::config::LoggingConfig)) applies to every target.
//! The format is compact and hides the module prefix (`with_target(false)`),
//! since store events already carry an `entity_type` field.
//!
//! ```bash
//! # Store and request logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads at every client and store entry point
//! RUST_LOG=debug cargo run
//!
//! # Only the HTTP layer
//! RUST_LOG=tower_http=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final store size
//! - **Store Operations**: Create, Get, List, Count, Update and Delete
//! - **Requests**: one span per HTTP request from `tower-http`'s `TraceLayer`
//!
//! With `RUST_LOG=info`:
//!
//! ```text
//! INFO Actor started entity_type="User"
//! INFO Created entity_type="User" id=1 size=1
//! WARN Create failed entity_type="User" error=User validation error: name must not be empty
//! INFO Deleted entity_type="User" id=1 size=0
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. `default_level` is used when `RUST_LOG`
/// is unset or invalid.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
