use leptos::prelude::*;
use ledger_sync::{Confirmation, Note};

use super::NotesSync;
use crate::components::DeleteConfirmButton;
use crate::{format, markdown};

const EXCERPT_CHARS: usize = 140;

#[component]
pub fn NoteGrid(notes: NotesSync) -> impl IntoView {
    let state = notes.state();

    view! {
        <Show when=move || state.with(|s| s.records.is_empty() && !s.loading)>
            <p class="empty-state">"No notes yet."</p>
        </Show>
        <div class="note-grid">
            <For
                each=move || state.with(|s| s.records.clone())
                key=|note| (note.id, note.title.clone(), note.content.clone())
                let:note
            >
                <NoteCard notes=notes note=note />
            </For>
        </div>
    }
}

#[component]
fn NoteCard(notes: NotesSync, note: Note) -> impl IntoView {
    let state = notes.state();
    let id = note.id;
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let pending = Signal::derive(move || state.with(|s| s.is_pending_delete(&id)));
    let excerpt = markdown::excerpt(&note.content, EXCERPT_CHARS);
    let created = format::timestamp(&note.created_at);
    let title = note.title.clone();

    view! {
        <article
            class="note-card"
            class:focused=move || state.with(|s| s.focused_id() == Some(id))
            on:click=move |_| {
                if !loading.get_untracked() {
                    notes.run(move |sync| async move { sync.fetch_one(id).await });
                }
            }
        >
            <h3>{title}</h3>
            <p class="note-excerpt">{excerpt}</p>
            <footer class="card-footer">
                <span class="timestamp">{created}</span>
                <button
                    class="edit-btn"
                    disabled=move || loading.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        notes.local(|sync| sync.start_editing(&note));
                    }
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    pending=pending
                    disabled=loading
                    on_request=Callback::new(move |_: ()| notes.local(|sync| sync.request_remove(id)))
                    on_decide=Callback::new(move |decision: Confirmation| {
                        notes.run(move |sync| async move { sync.confirm_remove(decision).await })
                    })
                />
            </footer>
        </article>
    }
}
