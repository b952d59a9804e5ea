//! Database Connection and Setup
//!
//! Each app owns one SQLite file. The connection sits behind an async
//! mutex and is only used synchronously while the lock is held.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Which tables a database file carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Notes,
    Inventory,
}

impl Schema {
    fn migrations(&self) -> &'static str {
        match self {
            Schema::Notes => {
                "CREATE TABLE IF NOT EXISTS notes (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    content TEXT NOT NULL,
                    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                );
                CREATE INDEX IF NOT EXISTS idx_notes_created ON notes(created_at);"
            }
            Schema::Inventory => {
                "CREATE TABLE IF NOT EXISTS products (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    category TEXT NOT NULL,
                    quantity INTEGER NOT NULL DEFAULT 0,
                    price REAL NOT NULL DEFAULT 0,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_products_category ON products(category);"
            }
        }
    }
}

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    conn: SharedConnection,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
        }
    }

    /// Handle shared with the repositories
    pub fn connection(&self) -> SharedConnection {
        self.conn.clone()
    }
}

/// Open `db_path` (or `:memory:`) and run the schema migrations.
pub async fn init_db(db_path: &Path, schema: Schema) -> Result<DbState, String> {
    let conn = Connection::open(db_path)
        .map_err(|e| format!("Failed to open {}: {}", db_path.display(), e))?;

    conn.execute_batch(schema.migrations())
        .map_err(|e| format!("Failed to run migrations: {}", e))?;

    let state = DbState::new();
    *state.conn.lock().await = Some(conn);
    tracing::info!(path = %db_path.display(), ?schema, "database ready");
    Ok(state)
}

/// Borrow the connection out of a held lock.
pub(crate) fn connected(guard: &Option<Connection>) -> DomainResult<&Connection> {
    guard
        .as_ref()
        .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}
