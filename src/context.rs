//! Application Context
//!
//! Item actions provided to components via Leptos Context API.

use leptos::prelude::*;

use crate::error::AppResult;
use crate::models::{ClientItem, ItemId, NewItem};
use crate::queue::AddQueue;
use crate::store::{store_remove_item, store_toggle_favourite, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    add_queue: StoredValue<AddQueue>,
}

impl AppContext {
    pub fn new(store: AppStore, add_queue: AddQueue) -> Self {
        Self {
            store,
            add_queue: StoredValue::new(add_queue),
        }
    }

    /// Remove an item; unknown ids are ignored
    pub fn on_item_remove(&self, id: ItemId) {
        if let Err(err) = store_remove_item(&self.store, id) {
            log::warn!("remove #{} dropped: {}", id, err);
        }
    }

    /// Flip an item's favourite flag; unknown ids are ignored
    pub fn on_item_toggle_favourite(&self, id: ItemId) {
        if let Err(err) = store_toggle_favourite(&self.store, id) {
            log::warn!("toggle #{} dropped: {}", id, err);
        }
    }

    /// Queue a new item; resolves once it has an id and is in the store
    pub async fn on_item_add(&self, item: NewItem) -> AppResult<ClientItem> {
        let queue = self.add_queue.get_value();
        queue.submit(item).await
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
