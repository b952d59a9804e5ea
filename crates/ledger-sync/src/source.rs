//! Record Sources
//!
//! A record source groups the gateway commands for one record kind behind a
//! uniform CRUD surface the Synchronizer can drive.

use std::convert::Infallible;

use async_trait::async_trait;

use crate::commands::*;
use crate::draft::{Draft, NoteDraft, ProductDraft};
use crate::gateway::{call, GatewayError, InvokeBridge};
use crate::models::{Category, Note, Product, Record};

pub type IdOf<S> = <<S as RecordSource>::Record as Record>::Id;
pub type PayloadOf<S> = <<S as RecordSource>::Draft as Draft>::Payload;

/// Criterion accepted by a filtered list command
pub trait FilterCriterion {
    /// The sentinel criterion that matches every record
    fn is_all(&self) -> bool;
}

/// Record kinds without a filtered list command
impl FilterCriterion for Infallible {
    fn is_all(&self) -> bool {
        match *self {}
    }
}

/// Product list filter; `"all"` is the sentinel for the unfiltered list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(s.to_string())
        }
    }
}

impl FilterCriterion for CategoryFilter {
    fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

/// CRUD surface over the gateway for one record kind
#[async_trait(?Send)]
pub trait RecordSource {
    type Record: Record;
    type Draft: Draft<Record = Self::Record>;
    type Filter: FilterCriterion;
    /// Backend-computed aggregate shown next to the list
    type Summary: Clone + PartialEq + std::fmt::Debug + 'static;

    /// Singular noun for user-facing messages
    const NOUN: &'static str;
    const PLURAL: &'static str;

    async fn list_all(&self) -> Result<Vec<Self::Record>, GatewayError>;

    async fn list_filtered(&self, filter: &Self::Filter) -> Result<Vec<Self::Record>, GatewayError>;

    async fn fetch_one(&self, id: &IdOf<Self>) -> Result<Option<Self::Record>, GatewayError>;

    async fn create(&self, payload: PayloadOf<Self>) -> Result<(), GatewayError>;

    async fn update(&self, id: &IdOf<Self>, payload: PayloadOf<Self>) -> Result<(), GatewayError>;

    async fn delete(&self, id: &IdOf<Self>) -> Result<(), GatewayError>;

    async fn summaries(&self) -> Result<Vec<Self::Summary>, GatewayError>;
}

// ========================
// Notes
// ========================

pub struct NoteSource<B> {
    bridge: B,
}

impl<B: InvokeBridge> NoteSource<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }
}

#[async_trait(?Send)]
impl<B: InvokeBridge> RecordSource for NoteSource<B> {
    type Record = Note;
    type Draft = NoteDraft;
    type Filter = Infallible;
    type Summary = Infallible;

    const NOUN: &'static str = "note";
    const PLURAL: &'static str = "notes";

    async fn list_all(&self) -> Result<Vec<Note>, GatewayError> {
        call(&self.bridge, &GetAllNotes).await
    }

    async fn list_filtered(&self, filter: &Infallible) -> Result<Vec<Note>, GatewayError> {
        match *filter {}
    }

    async fn fetch_one(&self, id: &i64) -> Result<Option<Note>, GatewayError> {
        call(&self.bridge, &GetNote { id: *id }).await
    }

    async fn create(&self, payload: NewNote) -> Result<(), GatewayError> {
        let id = call(&self.bridge, &CreateNote { payload }).await?;
        tracing::debug!(id, "note created");
        Ok(())
    }

    async fn update(&self, id: &i64, payload: NewNote) -> Result<(), GatewayError> {
        let payload = NoteUpdate {
            id: *id,
            title: payload.title,
            content: payload.content,
        };
        call(&self.bridge, &UpdateNote { payload }).await
    }

    async fn delete(&self, id: &i64) -> Result<(), GatewayError> {
        call(&self.bridge, &DeleteNote { id: *id }).await
    }

    async fn summaries(&self) -> Result<Vec<Infallible>, GatewayError> {
        Ok(Vec::new())
    }
}

// ========================
// Products
// ========================

pub struct ProductSource<B> {
    bridge: B,
}

impl<B: InvokeBridge> ProductSource<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }
}

#[async_trait(?Send)]
impl<B: InvokeBridge> RecordSource for ProductSource<B> {
    type Record = Product;
    type Draft = ProductDraft;
    type Filter = CategoryFilter;
    type Summary = Category;

    const NOUN: &'static str = "product";
    const PLURAL: &'static str = "products";

    async fn list_all(&self) -> Result<Vec<Product>, GatewayError> {
        call(&self.bridge, &GetProducts).await
    }

    async fn list_filtered(&self, filter: &CategoryFilter) -> Result<Vec<Product>, GatewayError> {
        match filter {
            CategoryFilter::All => self.list_all().await,
            CategoryFilter::Category(category) => {
                call(
                    &self.bridge,
                    &GetProductsByCategory {
                        category: category.clone(),
                    },
                )
                .await
            }
        }
    }

    async fn fetch_one(&self, id: &String) -> Result<Option<Product>, GatewayError> {
        call(&self.bridge, &GetOneProduct { id: id.clone() }).await
    }

    async fn create(&self, fields: ProductFields) -> Result<(), GatewayError> {
        let created = call(&self.bridge, &CreateProduct { fields }).await?;
        tracing::debug!(id = %created.id, "product created");
        Ok(())
    }

    async fn update(&self, id: &String, fields: ProductFields) -> Result<(), GatewayError> {
        call(&self.bridge, &UpdateProduct { id: id.clone(), fields }).await
    }

    async fn delete(&self, id: &String) -> Result<(), GatewayError> {
        call(&self.bridge, &DeleteProduct { id: id.clone() }).await
    }

    async fn summaries(&self) -> Result<Vec<Category>, GatewayError> {
        call(&self.bridge, &GetCategories).await
    }
}
