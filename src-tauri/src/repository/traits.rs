//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Ids are assigned by the repository on
/// `create`; the id carried by the argument is ignored.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// List all entities, newest first
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity. Fails with `NotFound` for unknown ids.
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID. Fails with `NotFound` for unknown ids.
    async fn delete(&self, id: &T::Id) -> DomainResult<()>;
}
