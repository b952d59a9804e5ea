//! Ledger Sync
//!
//! Keeps a client-side view of server-authoritative records in step with a
//! remote store reached through a single `invoke(command, args)` bridge.
//!
//! Layers, bottom-up:
//! - gateway: the raw bridge and the typed command schema
//! - commands: one `GatewayCommand` per backend command
//! - source: record sources that group commands per record kind
//! - store: the view-state snapshot and the seam the UI plugs into
//! - sync: the Synchronizer driving loading/error around every call

pub mod commands;
pub mod draft;
pub mod error;
pub mod gateway;
pub mod models;
pub mod source;
pub mod store;
pub mod sync;

#[cfg(test)]
mod tests;

pub use draft::{Draft, NoteDraft, ProductDraft, ValidationError};
pub use error::{Action, SyncError, SyncErrorKind, SyncResult};
pub use gateway::{call, GatewayCommand, GatewayError, InvokeBridge};
pub use models::{Category, Note, Product, Record};
pub use source::{CategoryFilter, FilterCriterion, IdOf, NoteSource, PayloadOf, ProductSource, RecordSource};
pub use store::{StateOf, ViewState, ViewStore};
pub use sync::{Confirmation, Listing, Synchronizer};
