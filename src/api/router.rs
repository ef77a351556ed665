//! HTTP API router.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{handlers, state::AppState};

/// Create the API router with all endpoints.
///
/// # Routes
///
/// ## Service
/// - `GET /` - Welcome message
/// - `GET /health` - Health check with uptime
/// - `GET /analytics` - User counts
///
/// ## Users
/// - `POST /users`, `GET /users?skip=&limit=`
/// - `GET /users/{id}`, `PUT /users/{id}`, `DELETE /users/{id}`
///
/// ## Inventory
/// - `GET /inventory?searchString=&skip=&limit=`, `POST /inventory`
pub fn create_router(state: AppState, cors_enabled: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/analytics", get(handlers::analytics))
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        .route(
            "/inventory",
            get(handlers::inventory::search_inventory).post(handlers::inventory::add_inventory),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}
