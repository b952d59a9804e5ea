//! Form Drafts
//!
//! Mutable staging copies of a record's editable fields, held as the raw
//! text the user typed. A draft only becomes a gateway payload through
//! `validate`, so malformed input never reaches the backend.

use thiserror::Error;

use crate::commands::{NewNote, ProductFields};
use crate::models::{Note, Product};

/// Field-level rejection raised before dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a whole number, got {value:?}")]
    NotAnInteger { field: &'static str, value: String },
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("no record is selected for editing")]
    NothingSelected,
}

/// A form draft for one record kind
pub trait Draft: Clone + Default + PartialEq + 'static {
    type Record;
    /// Typed payload produced by a successful validation
    type Payload;

    /// Pre-fill a draft from an existing record (edit mode)
    fn from_record(record: &Self::Record) -> Self;

    fn validate(&self) -> Result<Self::Payload, ValidationError>;
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(trimmed.to_string())
}

// ========================
// Notes
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Draft for NoteDraft {
    type Record = Note;
    type Payload = NewNote;

    fn from_record(note: &Note) -> Self {
        Self::new(note.title.clone(), note.content.clone())
    }

    fn validate(&self) -> Result<NewNote, ValidationError> {
        let title = required("title", &self.title)?;
        if self.content.trim().is_empty() {
            return Err(ValidationError::Missing("content"));
        }
        // Body whitespace is significant (Markdown), only the title is trimmed.
        Ok(NewNote {
            title,
            content: self.content.clone(),
        })
    }
}

// ========================
// Products
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }
}

impl Draft for ProductDraft {
    type Record = Product;
    type Payload = ProductFields;

    fn from_record(product: &Product) -> Self {
        Self::new(
            product.name.clone(),
            product.category.clone(),
            product.quantity.to_string(),
            product.price.to_string(),
        )
    }

    fn validate(&self) -> Result<ProductFields, ValidationError> {
        let name = required("name", &self.name)?;
        let category = required("category", &self.category)?;

        let raw_quantity = self.quantity.trim();
        let quantity: i32 = raw_quantity
            .parse()
            .map_err(|_| ValidationError::NotAnInteger {
                field: "quantity",
                value: self.quantity.clone(),
            })?;
        if quantity < 0 {
            return Err(ValidationError::Negative("quantity"));
        }

        let raw_price = self.price.trim();
        let price: f64 = raw_price
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| ValidationError::NotANumber {
                field: "price",
                value: self.price.clone(),
            })?;
        if price < 0.0 {
            return Err(ValidationError::Negative("price"));
        }
        // "-0" parses to negative zero
        let price = if price == 0.0 { 0.0 } else { price };

        Ok(ProductFields {
            name,
            category,
            quantity,
            price,
        })
    }
}
