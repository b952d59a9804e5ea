//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod log_cmd;
mod note_cmd;
mod product_cmd;

pub use log_cmd::*;
pub use note_cmd::*;
pub use product_cmd::*;
