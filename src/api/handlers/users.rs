//! `/users` handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::{error::ApiError, state::AppState};
use crate::model::{User, UserCreate, UserId, UserUpdate};

/// Default page size of `GET /users`.
pub const DEFAULT_LIMIT: usize = 100;

/// Largest page size of `GET /users`.
pub const MAX_LIMIT: usize = 1000;

/// Query parameters for listing users.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl ListParams {
    /// Resolved `(skip, limit)`, rejecting limits outside `1..=MAX_LIMIT`.
    pub fn page(&self) -> Result<(usize, usize), ApiError> {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ApiError::BadRequest(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }
        Ok((skip, limit))
    }
}

/// Ids start at 1; `0` is rejected before reaching the store.
fn user_id(path: Result<Path<UserId>, PathRejection>) -> Result<UserId, ApiError> {
    let Path(id) = path?;
    if id == 0 {
        return Err(ApiError::BadRequest("id must be greater than 0".into()));
    }
    Ok(id)
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(params) = payload?;
    let user = state.users.create_user(params).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list_users(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<User>>, ApiError> {
    let Query(params) = params?;
    let (skip, limit) = params.page()?;
    debug!(skip, limit, "list_users");
    Ok(Json(state.users.list_users(skip, limit).await?))
}

pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let id = user_id(id)?;
    Ok(Json(state.users.get_user(id).await?))
}

/// Applies only the fields present in the body.
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let id = user_id(id)?;
    let Json(update) = payload?;
    Ok(Json(state.users.update_user(id, update).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = user_id(id)?;
    state.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
