//! HTTP API handlers.

pub mod inventory;
pub mod users;

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{error::ApiError, state::AppState};

/// Response for the health check endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    /// Seconds since the server started.
    pub uptime: f64,
}

/// Response for the analytics endpoint.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub total_users: usize,
    pub active_users: usize,
    pub inactive_users: usize,
    pub timestamp: DateTime<Utc>,
}

/// Root handler - welcome message and links.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to the resource server!",
        "health": "/health",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check handler.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.uptime(),
    })
}

/// User counts by activity flag.
pub async fn analytics(State(state): State<AppState>) -> Result<Json<AnalyticsResponse>, ApiError> {
    let (total_users, active_users) = state.users.activity_counts().await?;

    Ok(Json(AnalyticsResponse {
        total_users,
        active_users,
        inactive_users: total_users - active_users,
        timestamp: Utc::now(),
    }))
}
