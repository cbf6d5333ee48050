//! Page Header Component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>"Item Board"</h1>
            <p class="page-subtitle">"Mark favourites, remove items, add new ones."</p>
        </header>
    }
}
