//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second answers.

use leptos::prelude::*;
use ledger_sync::Confirmation;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. While `pending`, shows "Delete?" with ✓/✗.
///
/// # Arguments
/// * `pending` - This record is the one awaiting confirmation
/// * `on_request` - First click
/// * `on_decide` - The user's answer
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_request: Callback<()>,
    #[prop(into)] on_decide: Callback<Confirmation>,
) -> impl IntoView {
    view! {
        <Show
            when=move || pending.get()
            fallback=move || view! {
                <button
                    class="delete-btn"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_request.run(());
                    }
                >
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_decide.run(Confirmation::Confirmed);
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_decide.run(Confirmation::Declined);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
