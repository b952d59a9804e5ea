//! Inventory app: product form, category filter bar, product table and
//! detail overlay.
//!
//! Any successful mutation reloads the full list, so the filter bar falls
//! back to "All" with it.

mod category_bar;
mod product_detail;
mod product_form;
mod product_table;

use leptos::prelude::*;
use ledger_sync::{CategoryFilter, Product, ProductSource};

use crate::bridge::TauriBridge;
use crate::components::ErrorBanner;
use crate::format;
use crate::store::SyncHandle;

use category_bar::CategoryBar;
use product_detail::ProductDetail;
use product_form::ProductForm;
use product_table::ProductTable;

pub type InventorySync = SyncHandle<ProductSource<TauriBridge>>;

#[component]
pub fn InventoryApp() -> impl IntoView {
    let inventory: InventorySync = SyncHandle::new("inventory", ProductSource::new(TauriBridge));
    let state = inventory.state();
    let filter = RwSignal::new(CategoryFilter::All);

    inventory.run(|sync| async move { sync.refresh().await });

    let stock_value = move || {
        state.with(|s| s.records.iter().map(Product::stock_value).sum::<f64>())
    };

    view! {
        <section class="app-panel inventory-app">
            <header class="panel-header">
                <h1>"Inventory"</h1>
                <Show when=move || state.with(|s| s.loading)>
                    <span class="loading-indicator">"Working…"</span>
                </Show>
            </header>
            <ErrorBanner
                error=Signal::derive(move || state.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |_: ()| inventory.local(|sync| sync.dismiss_error()))
            />
            <ProductForm inventory=inventory filter=filter />
            <CategoryBar inventory=inventory filter=filter />
            <ProductTable inventory=inventory filter=filter />
            <p class="stock-value">
                "Total stock value: "
                <strong>{move || format::money(stock_value())}</strong>
            </p>
            <ProductDetail inventory=inventory />
        </section>
    }
}
