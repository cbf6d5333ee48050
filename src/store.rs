//! Item State Store
//!
//! `ItemState` holds the authoritative list of client items and is only
//! changed through [`ItemAction`]s. `AppState` wraps it in a Leptos
//! `reactive_stores` store together with the page status.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{AppError, AppResult};
use crate::models::{ClientItem, Item, ItemId};

/// Convert fetched items into client items (favourite = false)
pub fn make_client_items(items: Vec<Item>) -> Vec<ClientItem> {
    items.into_iter().map(ClientItem::from).collect()
}

/// User intents and data arrivals that change the item list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    Seed(Vec<Item>),
    Remove(ItemId),
    ToggleFavourite(ItemId),
    Prepend(ClientItem),
}

/// What an applied action did to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Changed,
    /// Action was valid but had nothing to act on
    Ignored,
}

/// Ordered list of client items, most recently added first
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct ItemState {
    pub items: Vec<ClientItem>,
    /// Set once the data source has seeded the list
    pub seeded: bool,
}

impl ItemState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Replace the list with fetched items.
    ///
    /// Only the first seed of an empty list applies; anything later would
    /// clobber user edits and returns `false`.
    pub fn seed(&mut self, items: Vec<Item>) -> bool {
        if self.seeded || !self.items.is_empty() {
            return false;
        }
        self.items = make_client_items(items);
        self.seeded = true;
        true
    }

    /// Remove the item with `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Flip the favourite flag, returning the new value.
    /// An unknown id is a no-op and yields `None`.
    pub fn toggle_favourite(&mut self, id: ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.is_favourite = !item.is_favourite;
        Some(item.is_favourite)
    }

    /// Insert a new item at the front of the list
    pub fn prepend(&mut self, item: ClientItem) -> AppResult<()> {
        if self.contains(item.id) {
            return Err(AppError::DuplicateId(item.id));
        }
        self.items.insert(0, item);
        Ok(())
    }

    /// Apply a single action. The list is left untouched on error.
    pub fn apply(&mut self, action: ItemAction) -> AppResult<ActionOutcome> {
        let changed = match action {
            ItemAction::Seed(items) => self.seed(items),
            ItemAction::Remove(id) => self.remove(id),
            ItemAction::ToggleFavourite(id) => self.toggle_favourite(id).is_some(),
            ItemAction::Prepend(item) => {
                self.prepend(item)?;
                true
            }
        };
        Ok(if changed { ActionOutcome::Changed } else { ActionOutcome::Ignored })
    }
}

/// Page-level state machine
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PageStatus {
    #[default]
    Loading,
    Ready,
    /// Fetch failed (terminal)
    Error(String),
}

impl PageStatus {
    /// Transition out of `Loading` once the fetch settles.
    /// `Ready` and `Error` are terminal and stay as they are.
    pub fn resolve(&self, fetch: Result<(), String>) -> PageStatus {
        match (self, fetch) {
            (PageStatus::Loading, Ok(())) => PageStatus::Ready,
            (PageStatus::Loading, Err(message)) => PageStatus::Error(message),
            (settled, _) => settled.clone(),
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub board: ItemState,
    pub status: PageStatus,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================
//
// Writes use `try_write` so a response arriving after the page was torn
// down is dropped with `AppError::Detached` instead of touching a disposed store.

/// Apply an action to the item list in the store
pub fn store_dispatch(store: &AppStore, action: ItemAction) -> AppResult<ActionOutcome> {
    let field = store.board();
    let mut board = field.try_write().ok_or(AppError::Detached)?;
    board.apply(action)
}

/// Seed the store from a successful fetch and mark the page ready,
/// or record the failure
pub fn store_finish_loading(store: &AppStore, fetched: AppResult<Vec<Item>>) -> AppResult<()> {
    let outcome = match fetched {
        Ok(items) => {
            let count = items.len();
            match store_dispatch(store, ItemAction::Seed(items))? {
                ActionOutcome::Changed => log::info!("seeded {} items", count),
                ActionOutcome::Ignored => log::debug!("store already populated, ignoring {} fetched items", count),
            }
            Ok(())
        }
        Err(err) => {
            log::error!("{}", err);
            Err(err.to_string())
        }
    };
    let field = store.status();
    let mut status = field.try_write().ok_or(AppError::Detached)?;
    let next = status.resolve(outcome);
    *status = next;
    Ok(())
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: ItemId) -> AppResult<ActionOutcome> {
    let outcome = store_dispatch(store, ItemAction::Remove(item_id))?;
    if outcome == ActionOutcome::Ignored {
        log::debug!("remove: no item #{}", item_id);
    }
    Ok(outcome)
}

/// Flip the favourite flag of an item in the store by ID
pub fn store_toggle_favourite(store: &AppStore, item_id: ItemId) -> AppResult<ActionOutcome> {
    let outcome = store_dispatch(store, ItemAction::ToggleFavourite(item_id))?;
    if outcome == ActionOutcome::Ignored {
        log::warn!("toggle favourite: no item #{}", item_id);
    }
    Ok(outcome)
}

/// Add a freshly created item to the front of the store
pub fn store_prepend_item(store: &AppStore, item: ClientItem) -> AppResult<()> {
    store_dispatch(store, ItemAction::Prepend(item)).map(|_| ())
}

/// Copy of the current items, or `None` if the store is gone
pub fn store_snapshot(store: &AppStore) -> Option<Vec<ClientItem>> {
    store.board().items().try_get_untracked()
}
