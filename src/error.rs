//! Application Errors
//!
//! One error type shared by the data source, the store and the add queue.

use thiserror::Error;

use crate::models::ItemId;

/// Common result type for frontend operations
pub type AppResult<T> = Result<T, AppError>;

/// Frontend errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The data source failed to produce the item list
    #[error("failed to load items: {0}")]
    Fetch(String),
    /// Form input rejected before reaching the store
    #[error("invalid item: {0}")]
    InvalidItem(String),
    #[error("item id {0} is already in use")]
    DuplicateId(ItemId),
    #[error("no free item id left")]
    IdsExhausted,
    /// The add queue consumer has stopped
    #[error("add queue is closed")]
    QueueClosed,
    /// The page that owned the store is gone
    #[error("page is no longer mounted")]
    Detached,
}
