use leptos::prelude::*;
use ledger_sync::{CategoryFilter, ProductDraft};
use web_sys::{Event, SubmitEvent};

use super::InventorySync;

/// Create form, or edit form while a product is being edited.
///
/// Quantity and price stay raw text here; they are parsed when submitted.
#[component]
pub fn ProductForm(inventory: InventorySync, filter: RwSignal<CategoryFilter>) -> impl IntoView {
    let state = inventory.state();
    let editing = move || state.with(|s| s.editing);
    let loading = move || state.with(|s| s.loading);

    let field = move |read: fn(&ProductDraft) -> String| move || state.with(|s| read(&s.draft));
    let edit = move |ev: Event, write: fn(&mut ProductDraft, String)| {
        let value = event_target_value(&ev);
        inventory.local(|sync| sync.edit_draft(|d| write(d, value)));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        inventory.run(move |sync| async move {
            let result = sync.submit().await;
            if result.is_ok() {
                filter.set(CategoryFilter::All);
            }
            result
        });
    };

    view! {
        <form class="record-form product-form" class:editing=editing on:submit=on_submit>
            <h2>{move || if editing() { "Edit product" } else { "New product" }}</h2>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=field(|d| d.name.clone())
                    disabled=loading
                    on:input=move |ev| edit(ev, |d, v| d.name = v)
                />
                <input
                    type="text"
                    placeholder="Category"
                    list="category-options"
                    prop:value=field(|d| d.category.clone())
                    disabled=loading
                    on:input=move |ev| edit(ev, |d, v| d.category = v)
                />
                <datalist id="category-options">
                    <For
                        each=move || state.with(|s| s.summaries.clone())
                        key=|c| c.name.clone()
                        let:category
                    >
                        <option value={category.name}></option>
                    </For>
                </datalist>
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="Quantity"
                    prop:value=field(|d| d.quantity.clone())
                    disabled=loading
                    on:input=move |ev| edit(ev, |d, v| d.quantity = v)
                />
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Price"
                    prop:value=field(|d| d.price.clone())
                    disabled=loading
                    on:input=move |ev| edit(ev, |d, v| d.price = v)
                />
            </div>
            <div class="form-actions">
                <button type="submit" class="primary-btn" disabled=loading>
                    {move || if editing() { "Save" } else { "Add product" }}
                </button>
                <Show when=editing>
                    <button
                        type="button"
                        disabled=loading
                        on:click=move |_| inventory.local(|sync| sync.cancel_editing())
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
