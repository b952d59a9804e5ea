//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod note_repo;
mod product_repo;
mod traits;


pub use db::{init_db, Schema};
pub use note_repo::NoteRepository;
pub use product_repo::ProductRepository;
pub use traits::Repository;
