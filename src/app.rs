//! Item Board App
//!
//! Root component: loads the item list once, then renders the
//! loading, error or ready view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{FilteredItemTable, Header, NewItemForm, Overview, PageError, PageLoader};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::ItemId;
use crate::queue::{run_add_queue, AddQueue};
use crate::store::{
    store_finish_loading, store_prepend_item, store_snapshot, AppState, AppStateStoreFields,
    ItemStateStoreFields, PageStatus,
};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (add_queue, add_requests) = AddQueue::new();
    let ctx = AppContext::new(store, add_queue);

    // Provide context to all children
    provide_context(ctx);

    // Single consumer for new items
    spawn_local(run_add_queue(
        add_requests,
        config.id_latency(),
        move || store_snapshot(&store),
        move |item| store_prepend_item(&store, item),
    ));

    // Load items once on mount
    let fetch_latency = config.fetch_latency();
    Effect::new(move |_| {
        log::info!("loading items");
        spawn_local(async move {
            let fetched = api::fetch_items(fetch_latency).await.map(|response| response.items);
            if let Err(err) = store_finish_loading(&store, fetched) {
                log::debug!("dropping item list: {}", err);
            }
        });
    });

    let items = Memo::new(move |_| store.board().items().get());
    let on_item_remove = Callback::new(move |id: ItemId| ctx.on_item_remove(id));
    let on_item_toggle_favourite = Callback::new(move |id: ItemId| ctx.on_item_toggle_favourite(id));

    move || match store.status().get() {
        PageStatus::Loading => view! { <PageLoader /> }.into_any(),
        PageStatus::Error(message) => view! { <PageError message=message /> }.into_any(),
        PageStatus::Ready => view! {
            <div class="page-wrapper">
                <Header />
                <main class="body-wrapper">
                    <div class="name-overview-wrapper">
                        <NewItemForm />
                        <Overview items=items />
                    </div>
                    <FilteredItemTable
                        items=items
                        on_item_remove=on_item_remove
                        on_item_toggle_favourite=on_item_toggle_favourite
                    />
                </main>
            </div>
        }.into_any(),
    }
}
