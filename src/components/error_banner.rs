use leptos::prelude::*;

/// Dismissible banner for the last operation failure
#[component]
pub fn ErrorBanner(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="error-banner" role="alert">
                <span class="error-text">{move || error.get().unwrap_or_default()}</span>
                <button class="error-dismiss" on:click=move |_| on_dismiss.run(())>
                    "×"
                </button>
            </div>
        </Show>
    }
}
