//! `/inventory` handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::{error::ApiError, state::AppState};
use crate::model::{InventoryItem, InventoryItemCreate};

/// Default page size of `GET /inventory`.
pub const DEFAULT_LIMIT: usize = 50;

/// Query parameters for searching the inventory.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Case-insensitive substring of the item name.
    pub search_string: Option<String>,
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
}

pub async fn search_inventory(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    let Query(params) = params?;
    let items = state
        .inventory
        .search_items(params.search_string.as_deref(), params.skip, params.limit)
        .await?;
    Ok(Json(items))
}

pub async fn add_inventory(
    State(state): State<AppState>,
    payload: Result<Json<InventoryItemCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(item) = payload?;
    state.inventory.add_item(item).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "item created".to_string(),
        }),
    ))
}
