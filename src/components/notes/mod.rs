//! Notes app: form, card grid and Markdown detail overlay.

mod note_detail;
mod note_form;
mod note_grid;

use leptos::prelude::*;
use ledger_sync::NoteSource;

use crate::bridge::TauriBridge;
use crate::components::ErrorBanner;
use crate::store::SyncHandle;

use note_detail::NoteDetail;
use note_form::NoteForm;
use note_grid::NoteGrid;

pub type NotesSync = SyncHandle<NoteSource<TauriBridge>>;

#[component]
pub fn NotesApp() -> impl IntoView {
    let notes: NotesSync = SyncHandle::new("notes", NoteSource::new(TauriBridge));
    let state = notes.state();

    notes.run(|sync| async move { sync.list_all().await });

    view! {
        <section class="app-panel notes-app">
            <header class="panel-header">
                <h1>"Notes"</h1>
                <Show when=move || state.with(|s| s.loading)>
                    <span class="loading-indicator">"Working…"</span>
                </Show>
            </header>
            <ErrorBanner
                error=Signal::derive(move || state.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |_: ()| notes.local(|sync| sync.dismiss_error()))
            />
            <NoteForm notes=notes />
            <NoteGrid notes=notes />
            <NoteDetail notes=notes />
        </section>
    }
}
