//! HTTP API over the resource stores.
//!
//! Handlers are thin: they decode the request, call a client and map the
//! client's error onto [`ApiError`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! let system = ResourceSystem::new(&StoreConfig::default());
//! let app = create_router(AppState::from_system(&system), true);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::create_router;
pub use state::AppState;
