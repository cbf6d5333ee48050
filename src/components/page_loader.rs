//! Page Loader Component
//!
//! Shown while the item list is being fetched.

use leptos::prelude::*;

#[component]
pub fn PageLoader() -> impl IntoView {
    view! {
        <div class="page-loader" role="status">
            <div class="spinner"></div>
            <p>"Loading items..."</p>
        </div>
    }
}
