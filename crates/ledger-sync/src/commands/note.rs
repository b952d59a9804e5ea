//! Note Commands

use serde::{Deserialize, Serialize};

use crate::gateway::GatewayCommand;
use crate::models::Note;

// ========================
// Payloads
// ========================

/// Validated fields of a note, as sent on create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteUpdate {
    pub id: i64,
    pub title: String,
    pub content: String,
}

// ========================
// Commands
// ========================

#[derive(Debug, Serialize)]
pub struct GetAllNotes;

impl GatewayCommand for GetAllNotes {
    const NAME: &'static str = "get_all_notes";
    type Output = Vec<Note>;
}

#[derive(Debug, Serialize)]
pub struct GetNote {
    pub id: i64,
}

impl GatewayCommand for GetNote {
    const NAME: &'static str = "get_note";
    type Output = Option<Note>;
}

#[derive(Debug, Serialize)]
pub struct CreateNote {
    pub payload: NewNote,
}

impl GatewayCommand for CreateNote {
    const NAME: &'static str = "create_note";
    /// Server-assigned id
    type Output = i64;
}

#[derive(Debug, Serialize)]
pub struct UpdateNote {
    pub payload: NoteUpdate,
}

impl GatewayCommand for UpdateNote {
    const NAME: &'static str = "update_note";
    type Output = ();
}

#[derive(Debug, Serialize)]
pub struct DeleteNote {
    pub id: i64,
}

impl GatewayCommand for DeleteNote {
    const NAME: &'static str = "delete_note";
    type Output = ();
}
