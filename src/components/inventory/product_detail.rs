use leptos::prelude::*;

use super::InventorySync;
use crate::format;

/// Overlay for the focused product. Hidden while the product is being edited.
#[component]
pub fn ProductDetail(inventory: InventorySync) -> impl IntoView {
    let state = inventory.state();
    let shown = move || state.with(|s| (!s.editing).then(|| s.focused.clone()).flatten());
    let close = move |_| inventory.local(|sync| sync.close_detail());

    view! {
        {move || shown().map(|product| {
            let editable = product.clone();
            view! {
                <div class="overlay" on:click=close>
                    <article class="detail-card" on:click=|ev| ev.stop_propagation()>
                        <header class="detail-header">
                            <h2>{product.name.clone()}</h2>
                            <button class="close-btn" on:click=close>"×"</button>
                        </header>
                        <dl class="detail-fields">
                            <dt>"Category"</dt>
                            <dd>{product.category.clone()}</dd>
                            <dt>"Quantity"</dt>
                            <dd>{product.quantity}</dd>
                            <dt>"Unit price"</dt>
                            <dd>{format::money(product.price)}</dd>
                            <dt>"Stock value"</dt>
                            <dd>{format::money(product.stock_value())}</dd>
                            <dt>"Created"</dt>
                            <dd>{format::timestamp(&product.created_at)}</dd>
                            <dt>"Updated"</dt>
                            <dd>{format::timestamp(&product.updated_at)}</dd>
                        </dl>
                        <footer class="detail-actions">
                            <button
                                disabled=move || state.with(|s| s.loading)
                                on:click=move |_| inventory.local(|sync| sync.start_editing(&editable))
                            >
                                "Edit"
                            </button>
                        </footer>
                    </article>
                </div>
            }
        })}
    }
}
