use leptos::prelude::*;
use leptos::task::spawn_local;
use ledger_sync::commands::GetRecentLogs;
use ledger_sync::call;

use crate::bridge::TauriBridge;
use crate::components::ErrorBanner;

/// Recent backend log lines, fetched on mount and on demand
#[component]
pub fn LogPanel() -> impl IntoView {
    let lines = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let reload = move || {
        loading.set(true);
        spawn_local(async move {
            match call(&TauriBridge, &GetRecentLogs).await {
                Ok(fetched) => {
                    lines.set(fetched);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Failed to load logs: {}", e))),
            }
            loading.set(false);
        });
    };
    reload();

    view! {
        <section class="log-panel">
            <ErrorBanner error=error on_dismiss=move |_: ()| error.set(None) />
            <header class="log-header">
                <button disabled=move || loading.get() on:click=move |_| reload()>
                    "Refresh"
                </button>
                <span class="log-count">{move || format!("{} lines", lines.with(Vec::len))}</span>
            </header>
            <pre class="log-lines">
                {move || lines.with(|l| l.join("\n"))}
            </pre>
        </section>
    }
}
