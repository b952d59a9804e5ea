//! Note Repository
//!
//! SQLite-backed implementation for Note CRUD operations.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::db::{connected, SharedConnection};
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Note};

const SELECT_NOTE: &str = "SELECT id, title, content, created_at FROM notes";

pub struct NoteRepository {
    conn: SharedConnection,
}

impl NoteRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

fn row_to_note(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn fetch(conn: &Connection, id: i64) -> rusqlite::Result<Option<Note>> {
    conn.query_row(&format!("{} WHERE id = ?1", SELECT_NOTE), params![id], row_to_note)
        .optional()
}

fn not_found(id: i64) -> DomainError {
    DomainError::NotFound(format!("note {}", id))
}

#[async_trait]
impl Repository<Note> for NoteRepository {
    async fn create(&self, entity: &Note) -> DomainResult<Note> {
        entity.validate()?;
        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;

        conn.execute(
            "INSERT INTO notes (title, content) VALUES (?1, ?2)",
            params![entity.title, entity.content],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, "note created");

        fetch(conn, id)?.ok_or_else(|| not_found(id))
    }

    async fn find_by_id(&self, id: &i64) -> DomainResult<Option<Note>> {
        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;
        Ok(fetch(conn, *id)?)
    }

    async fn list(&self) -> DomainResult<Vec<Note>> {
        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;

        let mut stmt = conn.prepare(&format!(
            "{} ORDER BY created_at DESC, id DESC",
            SELECT_NOTE
        ))?;
        let notes = stmt
            .query_map([], row_to_note)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(notes)
    }

    async fn update(&self, entity: &Note) -> DomainResult<Note> {
        entity.validate()?;
        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;

        let changed = conn.execute(
            "UPDATE notes SET title = ?1, content = ?2 WHERE id = ?3",
            params![entity.title, entity.content, entity.id],
        )?;
        if changed == 0 {
            return Err(not_found(entity.id));
        }

        fetch(conn, entity.id)?.ok_or_else(|| not_found(entity.id))
    }

    async fn delete(&self, id: &i64) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;

        let changed = conn.execute("DELETE FROM notes WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(not_found(*id));
        }
        tracing::debug!(id, "note deleted");
        Ok(())
    }
}
