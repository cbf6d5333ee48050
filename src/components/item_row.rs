//! Item Row Component
//!
//! One row of the item table.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{ClientItem, ItemId};

/// A single item row with favourite toggle and remove button
#[component]
pub fn ItemRow(
    item: ClientItem,
    on_remove: Callback<ItemId>,
    on_toggle_favourite: Callback<ItemId>,
) -> impl IntoView {
    let id = item.id;
    let is_favourite = item.is_favourite;

    view! {
        <tr class=if is_favourite { "item-row favourite" } else { "item-row" }>
            <td class="item-id">{id}</td>
            <td class="item-name">{item.name}</td>
            <td class="item-description">{item.description.unwrap_or_default()}</td>
            <td class="item-actions">
                <button
                    class=if is_favourite { "favourite-btn active" } else { "favourite-btn" }
                    title=if is_favourite { "Unmark favourite" } else { "Mark favourite" }
                    on:click=move |_| on_toggle_favourite.run(id)
                >
                    {if is_favourite { "★" } else { "☆" }}
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=move |_| on_remove.run(id)
                />
            </td>
        </tr>
    }
}
