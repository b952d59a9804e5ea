//! Note Entity
//!
//! A titled Markdown note. Ids are SQLite rowids.

use serde::{Deserialize, Serialize};

use super::entity::{require_text, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier (0 until stored)
    pub id: i64,
    pub title: String,
    /// Markdown body
    pub content: String,
    /// Set by the database on insert, never updated
    pub created_at: String,
}

impl Note {
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: 0,
            title,
            content,
            created_at: String::new(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)
    }
}

impl Entity for Note {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Payload of `create_note`
#[derive(Debug, Clone, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

impl From<NewNote> for Note {
    fn from(new: NewNote) -> Self {
        Note::new(new.title, new.content)
    }
}

/// Payload of `update_note`
#[derive(Debug, Clone, Deserialize)]
pub struct NoteUpdate {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<NoteUpdate> for Note {
    fn from(update: NoteUpdate) -> Self {
        Note {
            id: update.id,
            ..Note::new(update.title, update.content)
        }
    }
}
