//! Product Entity
//!
//! An inventory line. Ids are UUID v4 strings assigned on insert and
//! timestamps are RFC 3339.

use serde::{Deserialize, Serialize};

use super::entity::{require_text, DomainError, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    /// Unit price
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl Product {
    pub fn new(name: String, category: String, quantity: i32, price: f64) -> Self {
        Self {
            id: String::new(),
            name,
            category,
            quantity,
            price,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)?;
        require_text("category", &self.category)?;
        if self.quantity < 0 {
            return Err(DomainError::InvalidInput(
                "quantity must not be negative".to_string(),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::InvalidInput(
                "price must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}
