//! Category summary, computed by grouping products.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Number of products in this category
    pub count: i32,
}
