use leptos::prelude::*;
use web_sys::SubmitEvent;

use super::NotesSync;

/// Create form, or edit form while a note is being edited
#[component]
pub fn NoteForm(notes: NotesSync) -> impl IntoView {
    let state = notes.state();
    let editing = move || state.with(|s| s.editing);
    let loading = move || state.with(|s| s.loading);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        notes.run(|sync| async move { sync.submit().await });
    };

    view! {
        <form class="record-form note-form" class:editing=editing on:submit=on_submit>
            <h2>{move || if editing() { "Edit note" } else { "New note" }}</h2>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || state.with(|s| s.draft.title.clone())
                disabled=loading
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    notes.local(|sync| sync.edit_draft(|d| d.title = value));
                }
            />
            <textarea
                placeholder="Content (Markdown)"
                rows="6"
                prop:value=move || state.with(|s| s.draft.content.clone())
                disabled=loading
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    notes.local(|sync| sync.edit_draft(|d| d.content = value));
                }
            ></textarea>
            <div class="form-actions">
                <button type="submit" class="primary-btn" disabled=loading>
                    {move || if editing() { "Save" } else { "Add note" }}
                </button>
                <Show when=editing>
                    <button
                        type="button"
                        disabled=loading
                        on:click=move |_| notes.local(|sync| sync.cancel_editing())
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
