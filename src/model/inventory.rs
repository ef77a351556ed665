//! Inventory catalogue records.
//!
//! Unlike users, inventory ids may be chosen by the caller; see
//! [`InventoryItemCreate::id`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an item in the inventory catalogue.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub release_date: DateTime<Utc>,
    pub manufacturer: Manufacturer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payload for adding an item. A missing `id` gets a fresh v4 UUID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemCreate {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub release_date: DateTime<Utc>,
    pub manufacturer: Manufacturer,
}

/// Update payload for inventory items. It carries no fields: items are
/// immutable once added, and no route issues an update.
#[derive(Debug, Clone)]
pub struct InventoryItemUpdate;

/// Case-insensitive substring match on the item name.
#[derive(Debug, Clone)]
pub struct InventorySearch(String);

impl InventorySearch {
    pub fn new(term: impl AsRef<str>) -> Self {
        Self(term.as_ref().to_lowercase())
    }

    pub fn term(&self) -> &str {
        &self.0
    }
}

impl Manufacturer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            home_page: None,
            phone: None,
        }
    }
}
