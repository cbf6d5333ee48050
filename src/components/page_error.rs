//! Page Error Component
//!
//! Generic error view when the item list could not be loaded.

use leptos::prelude::*;

/// Error view; `message` is shown as detail under the generic text
#[component]
pub fn PageError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="page-error" role="alert">
            <h2>"Something went wrong"</h2>
            <p>"The item list could not be loaded. Reload the page to try again."</p>
            <p class="error-detail">{message}</p>
        </div>
    }
}
