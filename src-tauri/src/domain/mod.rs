//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod category;
mod entity;
mod note;
mod product;

pub use category::Category;
pub use entity::{DomainError, DomainResult, Entity};
pub use note::{NewNote, Note, NoteUpdate};
pub use product::Product;
