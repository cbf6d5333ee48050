//! New Item Form Component
//!
//! Form for creating new items.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::NewItem;

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let new_item = match NewItem::new(&name.get_untracked(), &description.get_untracked()) {
            Ok(item) => item,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_pending.set(true);

        spawn_local(async move {
            // The form may be gone by the time the id arrives
            match ctx.on_item_add(new_item).await {
                Ok(_) => {
                    let _ = set_name.try_set(String::new());
                    let _ = set_description.try_set(String::new());
                }
                Err(err) => {
                    let _ = set_error.try_set(Some(err.to_string()));
                }
            }
            let _ = set_pending.try_set(false);
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <h2>"Add item"</h2>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Adding..." } else { "Add" }}
            </button>
            {move || error.get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}
        </form>
    }
}
