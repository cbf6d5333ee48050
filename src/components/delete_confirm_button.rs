//! Delete Confirm Button Component
//!
//! Inline remove confirmation with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a × button initially. When clicked, shows "Remove?" with ✓/✗ buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class=button_class.clone()
                title="Remove"
                on:click=move |_| set_confirm_delete.set(true)
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Remove?"</span>
                <button class="confirm-btn" on:click=move |_| on_confirm.run(())>
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirm_delete.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
