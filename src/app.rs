//! Ledger Desk Frontend App
//!
//! Tab shell over the two apps and the log viewer. The apps stay mounted
//! so each keeps its own store while hidden; the log viewer reloads on open.

use leptos::prelude::*;

use crate::components::inventory::InventoryApp;
use crate::components::notes::NotesApp;
use crate::components::LogPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Notes,
    Inventory,
    Logs,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Notes => "Notes",
            Tab::Inventory => "Inventory",
            Tab::Logs => "Logs",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (tab, set_tab) = signal(Tab::Notes);

    let tab_button = move |target: Tab| {
        view! {
            <button
                class="tab"
                class:active=move || tab.get() == target
                on:click=move |_| {
                    web_sys::console::log_1(&format!("[APP] switching to {}", target.label()).into());
                    set_tab.set(target);
                }
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <div class="app-shell">
            <nav class="tab-bar">
                {tab_button(Tab::Notes)}
                {tab_button(Tab::Inventory)}
                {tab_button(Tab::Logs)}
            </nav>
            <div class="tab-panel" class:hidden=move || tab.get() != Tab::Notes>
                <NotesApp />
            </div>
            <div class="tab-panel" class:hidden=move || tab.get() != Tab::Inventory>
                <InventoryApp />
            </div>
            <Show when=move || tab.get() == Tab::Logs>
                <LogPanel />
            </Show>
        </div>
    }
}
