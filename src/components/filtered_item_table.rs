//! Filtered Item Table Component
//!
//! Search box and favourites switch above the item table.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::filter::{filter_items, ItemFilter};
use crate::models::{ClientItem, ItemId};

/// Item table with client-side filtering
#[component]
pub fn FilteredItemTable(
    #[prop(into)] items: Signal<Vec<ClientItem>>,
    on_item_remove: Callback<ItemId>,
    on_item_toggle_favourite: Callback<ItemId>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (favourites_only, set_favourites_only) = signal(false);

    let filter = Memo::new(move |_| ItemFilter {
        query: query.get(),
        favourites_only: favourites_only.get(),
    });
    let visible = Memo::new(move |_| items.with(|items| filter_items(items, &filter.get())));

    let empty_message = move || {
        if items.with(Vec::is_empty) {
            "No items yet."
        } else {
            "No items match the filter."
        }
    };

    view! {
        <section class="item-table-section">
            <div class="filter-row">
                <input
                    type="search"
                    placeholder="Filter by name..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <label class="favourites-only">
                    <input
                        type="checkbox"
                        prop:checked=move || favourites_only.get()
                        on:change=move |ev| set_favourites_only.set(event_target_checked(&ev))
                    />
                    "Favourites only"
                </label>
                <Show when=move || filter.with(ItemFilter::is_active)>
                    <span class="filter-count">
                        {move || format!("{} of {}", visible.with(Vec::len), items.with(Vec::len))}
                    </span>
                </Show>
            </div>

            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=move || view! { <p class="empty-state">{empty_message}</p> }
            >
                <table class="item-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            // Include the flag so a toggle re-renders the row
                            key=|item| (item.id, item.is_favourite)
                            children=move |item| view! {
                                <ItemRow
                                    item=item
                                    on_remove=on_item_remove
                                    on_toggle_favourite=on_item_toggle_favourite
                                />
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
