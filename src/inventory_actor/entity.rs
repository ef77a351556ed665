//! ActorEntity trait implementation for the InventoryItem domain type.
//!
//! Items carry their own UUID when the caller supplies one, so duplicate ids
//! surface as a framework conflict rather than an entity error.

use super::InventoryError;
use crate::framework::ActorEntity;
use crate::model::{InventoryItem, InventoryItemCreate, InventoryItemUpdate, InventorySearch};
use uuid::Uuid;

impl ActorEntity for InventoryItem {
    type Id = Uuid;
    type Create = InventoryItemCreate;
    type Update = InventoryItemUpdate;
    type Filter = InventorySearch;
    type Error = InventoryError;

    fn requested_id(params: &InventoryItemCreate) -> Option<Uuid> {
        params.id
    }

    fn validate_create<'a, I>(params: &InventoryItemCreate, _existing: I) -> Result<(), InventoryError>
    where
        I: Iterator<Item = &'a Self>,
    {
        if params.name.trim().is_empty() {
            return Err(InventoryError::ValidationError("name must not be empty".into()));
        }
        if params.manufacturer.name.trim().is_empty() {
            return Err(InventoryError::ValidationError(
                "manufacturer name must not be empty".into(),
            ));
        }
        Ok(())
    }

    fn from_create_params(id: Uuid, params: InventoryItemCreate) -> Result<Self, InventoryError> {
        Ok(Self {
            id,
            name: params.name,
            release_date: params.release_date,
            manufacturer: params.manufacturer,
        })
    }

    /// Items are immutable; an update leaves the item exactly as stored.
    fn on_update(&mut self, _update: InventoryItemUpdate) -> Result<(), InventoryError> {
        Ok(())
    }

    fn matches(&self, search: &InventorySearch) -> bool {
        self.name.to_lowercase().contains(search.term())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Manufacturer;
    use chrono::Utc;

    fn item(name: &str) -> InventoryItem {
        let params = InventoryItemCreate {
            id: None,
            name: name.into(),
            release_date: Utc::now(),
            manufacturer: Manufacturer::new("ACME Corporation"),
        };
        InventoryItem::from_create_params(Uuid::new_v4(), params).unwrap()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let widget = item("Widget Adapter");
        assert!(widget.matches(&InventorySearch::new("widget")));
        assert!(widget.matches(&InventorySearch::new("ADAPTER")));
        assert!(!widget.matches(&InventorySearch::new("gizmo")));
    }

    #[test]
    fn test_blank_name_rejected() {
        let params = InventoryItemCreate {
            id: None,
            name: "  ".into(),
            release_date: Utc::now(),
            manufacturer: Manufacturer::new("ACME Corporation"),
        };
        let none: [InventoryItem; 0] = [];
        assert!(matches!(
            InventoryItem::validate_create(&params, none.iter()),
            Err(InventoryError::ValidationError(_))
        ));
    }

    #[test]
    fn test_update_leaves_item_unchanged() {
        let mut widget = item("Widget Adapter");
        let before = widget.clone();
        widget.on_update(InventoryItemUpdate).unwrap();
        assert_eq!(widget, before);
    }
}
