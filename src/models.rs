//! Frontend Models
//!
//! Data structures matching the (mocked) backend payloads, plus the
//! client-only favourite flag.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Item identifier as allocated by the backend
pub type ItemId = u32;

/// Item as returned by the data source (immutable once fetched)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response of the item list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

/// Item plus the client-side favourite flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientItem {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub is_favourite: bool,
}

impl ClientItem {
    /// Attach an allocated id to a new item
    pub fn from_new(id: ItemId, item: NewItem) -> Self {
        Self {
            id,
            name: item.name,
            description: item.description,
            is_favourite: false,
        }
    }
}

impl From<Item> for ClientItem {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            is_favourite: false,
        }
    }
}

/// Fields required to create an item (no id, no favourite flag)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}

impl NewItem {
    /// Build from raw form input. Name is required, a blank description is dropped.
    pub fn new(name: &str, description: &str) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidItem("name must not be empty".to_string()));
        }
        let description = description.trim();
        Ok(Self {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_item_from_item() {
        let item = Item { id: 7, name: "Ada".to_string(), description: None };
        let client: ClientItem = item.into();
        assert_eq!(client.id, 7);
        assert_eq!(client.name, "Ada");
        assert!(!client.is_favourite);
    }

    #[test]
    fn test_new_item_trims_input() {
        let item = NewItem::new("  Grace ", "   ").unwrap();
        assert_eq!(item.name, "Grace");
        assert_eq!(item.description, None);

        let item = NewItem::new("Linus", " kernel ").unwrap();
        assert_eq!(item.description.as_deref(), Some("kernel"));
    }

    #[test]
    fn test_new_item_rejects_blank_name() {
        assert!(matches!(NewItem::new("   ", "x"), Err(AppError::InvalidItem(_))));
    }

    #[test]
    fn test_client_item_serializes_camel_case() {
        let item = ClientItem::from_new(3, NewItem::new("C", "").unwrap());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["isFavourite"], serde_json::Value::Bool(false));
        assert_eq!(json["id"], 3);
    }
}
