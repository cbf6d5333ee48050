//! Overview Component
//!
//! Item and favourite counts.

use leptos::prelude::*;

use crate::filter::ItemSummary;
use crate::models::ClientItem;

#[component]
pub fn Overview(#[prop(into)] items: Signal<Vec<ClientItem>>) -> impl IntoView {
    let summary = Memo::new(move |_| items.with(|items| ItemSummary::of(items)));

    view! {
        <section class="overview">
            <h2>"Overview"</h2>
            <dl>
                <dt>"Items"</dt>
                <dd>{move || summary.get().total}</dd>
                <dt>"Favourites"</dt>
                <dd>{move || summary.get().favourites}</dd>
            </dl>
        </section>
    }
}
