//! Gateway Command Schema
//!
//! One type per backend command, organized by domain. Each type carries the
//! exact argument shape the backend handler expects.

mod log;
mod note;
mod product;

pub use log::*;
pub use note::*;
pub use product::*;
