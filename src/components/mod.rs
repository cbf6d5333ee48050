//! UI Components
//!
//! Leptos components for the item board page.

mod delete_confirm_button;
mod filtered_item_table;
mod header;
mod item_row;
mod new_item_form;
mod overview;
mod page_error;
mod page_loader;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filtered_item_table::FilteredItemTable;
pub use header::Header;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use overview::Overview;
pub use page_error::PageError;
pub use page_loader::PageLoader;
