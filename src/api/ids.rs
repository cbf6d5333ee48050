//! Identifier Allocation
//!
//! Simulates asking the backend for a fresh item id.

use std::collections::HashSet;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::models::{ClientItem, ItemId};
use super::simulate_latency;

/// Smallest id strictly above every id in use, or the lowest free id
/// once the range above is exhausted
pub fn next_free_id(items: &[ClientItem]) -> AppResult<ItemId> {
    let Some(max) = items.iter().map(|item| item.id).max() else {
        return Ok(1);
    };
    if let Some(next) = max.checked_add(1) {
        return Ok(next);
    }

    let used: HashSet<ItemId> = items.iter().map(|item| item.id).collect();
    (1..=ItemId::MAX)
        .find(|id| !used.contains(id))
        .ok_or(AppError::IdsExhausted)
}

/// Request a new id that collides with none of `items`
pub async fn generate_id(items: &[ClientItem], latency: Duration) -> AppResult<ItemId> {
    simulate_latency(latency).await;
    next_free_id(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: ItemId) -> ClientItem {
        ClientItem { id, name: format!("Item {}", id), description: None, is_favourite: false }
    }

    #[test]
    fn test_next_free_id_empty() {
        assert_eq!(next_free_id(&[]), Ok(1));
    }

    #[test]
    fn test_next_free_id_above_max() {
        let items = vec![make_item(3), make_item(9), make_item(1)];
        assert_eq!(next_free_id(&items), Ok(10));
    }

    #[test]
    fn test_next_free_id_wraps_to_gap() {
        let items = vec![make_item(1), make_item(2), make_item(ItemId::MAX)];
        assert_eq!(next_free_id(&items), Ok(3));
    }

    #[tokio::test]
    async fn test_generate_id_never_collides() {
        let mut items = vec![make_item(4), make_item(2)];
        for _ in 0..20 {
            let id = generate_id(&items, Duration::ZERO).await.unwrap();
            assert!(items.iter().all(|item| item.id != id));
            items.insert(0, make_item(id));
        }
    }
}
