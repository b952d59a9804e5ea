use leptos::prelude::*;
use ledger_sync::{CategoryFilter, Confirmation, Product};

use super::InventorySync;
use crate::components::DeleteConfirmButton;
use crate::format;

#[component]
pub fn ProductTable(inventory: InventorySync, filter: RwSignal<CategoryFilter>) -> impl IntoView {
    let state = inventory.state();

    view! {
        <Show
            when=move || state.with(|s| !s.records.is_empty())
            fallback=move || view! {
                <Show when=move || !state.with(|s| s.loading)>
                    <p class="empty-state">"No products."</p>
                </Show>
            }
        >
            <table class="product-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th class="num">"Qty"</th>
                        <th class="num">"Price"</th>
                        <th class="num">"Value"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.records.clone())
                        key=|p| (p.id.clone(), p.updated_at.clone())
                        let:product
                    >
                        <ProductRow inventory=inventory filter=filter product=product />
                    </For>
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn ProductRow(
    inventory: InventorySync,
    filter: RwSignal<CategoryFilter>,
    product: Product,
) -> impl IntoView {
    let state = inventory.state();
    let id = product.id.clone();
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let pending = {
        let id = id.clone();
        Signal::derive(move || state.with(|s| s.is_pending_delete(&id)))
    };
    let focused = {
        let id = id.clone();
        move || state.with(|s| s.focused_id().as_ref() == Some(&id))
    };
    let open = {
        let id = id.clone();
        move |_| {
            if loading.get_untracked() {
                return;
            }
            let id = id.clone();
            inventory.run(move |sync| async move { sync.fetch_one(id).await });
        }
    };
    let request = {
        let id = id.clone();
        Callback::new(move |_: ()| inventory.local(|sync| sync.request_remove(id.clone())))
    };
    let decide = Callback::new(move |decision: Confirmation| {
        inventory.run(move |sync| async move {
            let result = sync.confirm_remove(decision).await;
            if matches!(result, Ok(true)) {
                filter.set(CategoryFilter::All);
            }
            result
        })
    });

    let name = product.name.clone();
    let category = product.category.clone();
    let quantity = product.quantity;
    let price = format::money(product.price);
    let value = format::money(product.stock_value());
    let quantity_class = if quantity == 0 { "num out-of-stock" } else { "num" };

    view! {
        <tr class="product-row" class:focused=focused>
            <td class="name-cell" on:click=open>{name}</td>
            <td>{category}</td>
            <td class=quantity_class>{quantity}</td>
            <td class="num">{price}</td>
            <td class="num">{value}</td>
            <td class="row-actions">
                <button
                    class="edit-btn"
                    disabled=move || loading.get()
                    on:click=move |_| inventory.local(|sync| sync.start_editing(&product))
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    pending=pending
                    disabled=loading
                    on_request=request
                    on_decide=decide
                />
            </td>
        </tr>
    }
}
