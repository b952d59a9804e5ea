//! Tauri Commands for Note CRUD
//!
//! Create and update take a wrapped `payload` argument.

use tauri::State;

use crate::domain::{NewNote, Note, NoteUpdate};
use crate::repository::Repository;
use crate::AppState;

/// List all notes, newest first
#[tauri::command]
pub async fn get_all_notes(state: State<'_, AppState>) -> Result<Vec<Note>, String> {
    state.notes.list().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_note(state: State<'_, AppState>, id: i64) -> Result<Option<Note>, String> {
    state.notes.find_by_id(&id).await.map_err(|e| e.to_string())
}

/// Create a note and return its id
#[tauri::command]
pub async fn create_note(state: State<'_, AppState>, payload: NewNote) -> Result<i64, String> {
    let note = state
        .notes
        .create(&Note::from(payload))
        .await
        .map_err(|e| e.to_string())?;
    Ok(note.id)
}

#[tauri::command]
pub async fn update_note(state: State<'_, AppState>, payload: NoteUpdate) -> Result<(), String> {
    state
        .notes
        .update(&Note::from(payload))
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_note(state: State<'_, AppState>, id: i64) -> Result<(), String> {
    state.notes.delete(&id).await.map_err(|e| e.to_string())
}
