//! Item List Endpoint
//!
//! Serves the bundled fixture in place of `GET /items`. The first
//! successful response is cached for the rest of the session.

use std::cell::RefCell;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::models::ItemsResponse;
use super::simulate_latency;

const MOCK_ITEMS: &str = include_str!("mock_items.json");

thread_local! {
    static ITEMS_CACHE: RefCell<Option<ItemsResponse>> = const { RefCell::new(None) };
}

/// Parse an item list payload
pub fn parse_items(json: &str) -> AppResult<ItemsResponse> {
    serde_json::from_str(json).map_err(|e| AppError::Fetch(e.to_string()))
}

/// Fetch the item list, served from cache after the first success
pub async fn fetch_items(latency: Duration) -> AppResult<ItemsResponse> {
    if let Some(cached) = ITEMS_CACHE.with(|cache| cache.borrow().clone()) {
        log::debug!("serving {} items from cache", cached.items.len());
        return Ok(cached);
    }

    simulate_latency(latency).await;
    let response = parse_items(MOCK_ITEMS)?;
    log::debug!("fetched {} items", response.items.len());
    ITEMS_CACHE.with(|cache| *cache.borrow_mut() = Some(response.clone()));
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_parses_with_unique_ids() {
        let response = parse_items(MOCK_ITEMS).expect("fixture must parse");
        assert!(!response.items.is_empty());
        let ids: HashSet<u32> = response.items.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), response.items.len());
    }

    #[test]
    fn test_parse_items_rejects_bad_payload() {
        assert!(matches!(parse_items(r#"{"items": 3}"#), Err(AppError::Fetch(_))));
        assert!(matches!(parse_items("not json"), Err(AppError::Fetch(_))));
    }

    #[test]
    fn test_missing_description_defaults_to_none() {
        let response = parse_items(r#"{"items":[{"id":1,"name":"A"}]}"#).unwrap();
        assert_eq!(response.items[0].description, None);
    }

    #[tokio::test]
    async fn test_fetch_items_is_cached() {
        let first = fetch_items(Duration::ZERO).await.unwrap();
        let second = fetch_items(Duration::ZERO).await.unwrap();
        assert_eq!(first, second);
        assert!(ITEMS_CACHE.with(|cache| cache.borrow().is_some()));
    }
}
