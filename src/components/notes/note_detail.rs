use leptos::prelude::*;

use super::NotesSync;
use crate::{format, markdown};

/// Overlay for the focused note. Hidden while the note is being edited.
#[component]
pub fn NoteDetail(notes: NotesSync) -> impl IntoView {
    let state = notes.state();
    let shown = move || state.with(|s| (!s.editing).then(|| s.focused.clone()).flatten());

    view! {
        {move || shown().map(|note| {
            let html = markdown::render(&note.content);
            let editable = note.clone();
            view! {
                <div class="overlay" on:click=move |_| notes.local(|sync| sync.close_detail())>
                    <article class="detail-card" on:click=|ev| ev.stop_propagation()>
                        <header class="detail-header">
                            <h2>{note.title.clone()}</h2>
                            <button
                                class="close-btn"
                                on:click=move |_| notes.local(|sync| sync.close_detail())
                            >
                                "×"
                            </button>
                        </header>
                        <p class="timestamp">{format::timestamp(&note.created_at)}</p>
                        <div class="markdown-body" inner_html=html></div>
                        <footer class="detail-actions">
                            <button
                                disabled=move || state.with(|s| s.loading)
                                on:click=move |_| notes.local(|sync| sync.start_editing(&editable))
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
