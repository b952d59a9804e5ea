//! Client Models
//!
//! Data structures matching backend entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Core trait for server-assigned records
pub trait Record: Clone + PartialEq + fmt::Debug + 'static {
    /// The record's unique identifier
    type Id: Clone + PartialEq + fmt::Debug + fmt::Display + 'static;

    fn id(&self) -> Self::Id;
}

/// Note data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl Record for Note {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: f64,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Product {
    /// Stock value of this line (quantity × unit price)
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

impl Record for Product {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

/// Category summary computed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub count: i32,
}
