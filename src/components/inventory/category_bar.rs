use leptos::prelude::*;
use ledger_sync::{Category, CategoryFilter};

use super::InventorySync;

/// "All" plus one chip per backend category summary
#[component]
pub fn CategoryBar(inventory: InventorySync, filter: RwSignal<CategoryFilter>) -> impl IntoView {
    let state = inventory.state();
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let total = move || state.with(|s| s.summaries.iter().map(|c| c.count).sum::<i32>());

    let show_all = move |_| {
        inventory.run(move |sync| async move {
            let result = sync.list_all().await;
            if matches!(result, Ok(ref listing) if listing.applied) {
                filter.set(CategoryFilter::All);
            }
            result
        });
    };

    view! {
        <nav class="category-bar">
            <button
                class="chip"
                class:active=move || filter.with(|f| *f == CategoryFilter::All)
                disabled=move || loading.get()
                on:click=show_all
            >
                {move || format!("All ({})", total())}
            </button>
            <For
                each=move || state.with(|s| s.summaries.clone())
                key=|c| (c.name.clone(), c.count)
                let:category
            >
                <CategoryChip inventory=inventory filter=filter category=category loading=loading />
            </For>
        </nav>
    }
}

#[component]
fn CategoryChip(
    inventory: InventorySync,
    filter: RwSignal<CategoryFilter>,
    category: Category,
    loading: Signal<bool>,
) -> impl IntoView {
    let choice = CategoryFilter::Category(category.name.clone());
    let active = choice.clone();

    view! {
        <button
            class="chip"
            class:active=move || filter.with(|f| *f == active)
            disabled=move || loading.get()
            on:click=move |_| {
                let choice = choice.clone();
                inventory.run(move |sync| async move {
                    let result = sync.list_filtered(choice.clone()).await;
                    // A superseded reply left the table showing another listing.
                    if matches!(result, Ok(ref listing) if listing.applied) {
                        filter.set(choice);
                    }
                    result
                });
            }
        >
            {format!("{} ({})", category.name, category.count)}
        </button>
    }
}
