//! Product Repository
//!
//! SQLite-backed Product CRUD plus the category queries used by the
//! inventory filter bar.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use super::db::{connected, SharedConnection};
use super::traits::Repository;
use crate::domain::{Category, DomainError, DomainResult, Product};

const SELECT_PRODUCT: &str =
    "SELECT id, name, category, quantity, price, created_at, updated_at FROM products";

pub struct ProductRepository {
    conn: SharedConnection,
}

impl ProductRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Products in `category`, ordered by name
    pub async fn list_by_category(&self, category: &str) -> DomainResult<Vec<Product>> {
        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;

        let mut stmt = conn.prepare(&format!(
            "{} WHERE category = ?1 ORDER BY name ASC",
            SELECT_PRODUCT
        ))?;
        let products = stmt
            .query_map(params![category], row_to_product)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    /// Distinct categories with their product counts, largest first
    pub async fn categories(&self) -> DomainResult<Vec<Category>> {
        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;

        let mut stmt = conn.prepare(
            "SELECT category, COUNT(*) AS count FROM products
             GROUP BY category
             ORDER BY count DESC, category ASC",
        )?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    name: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }
}

fn row_to_product(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        quantity: row.get(3)?,
        price: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

fn fetch(conn: &Connection, id: &str) -> rusqlite::Result<Option<Product>> {
    conn.query_row(
        &format!("{} WHERE id = ?1", SELECT_PRODUCT),
        params![id],
        row_to_product,
    )
    .optional()
}

fn not_found(id: &str) -> DomainError {
    DomainError::NotFound(format!("product {}", id))
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[async_trait]
impl Repository<Product> for ProductRepository {
    async fn create(&self, entity: &Product) -> DomainResult<Product> {
        entity.validate()?;
        let id = Uuid::new_v4().to_string();
        let timestamp = now();

        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;
        conn.execute(
            "INSERT INTO products (id, name, category, quantity, price, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            params![
                id,
                entity.name,
                entity.category,
                entity.quantity,
                entity.price,
                timestamp
            ],
        )?;
        tracing::debug!(%id, category = %entity.category, "product created");

        fetch(conn, &id)?.ok_or_else(|| not_found(&id))
    }

    async fn find_by_id(&self, id: &String) -> DomainResult<Option<Product>> {
        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;
        Ok(fetch(conn, id)?)
    }

    async fn list(&self) -> DomainResult<Vec<Product>> {
        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;

        let mut stmt = conn.prepare(&format!(
            "{} ORDER BY created_at DESC, rowid DESC",
            SELECT_PRODUCT
        ))?;
        let products = stmt
            .query_map([], row_to_product)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    async fn update(&self, entity: &Product) -> DomainResult<Product> {
        entity.validate()?;
        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;

        let changed = conn.execute(
            "UPDATE products
             SET name = ?1, category = ?2, quantity = ?3, price = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                entity.name,
                entity.category,
                entity.quantity,
                entity.price,
                now(),
                entity.id
            ],
        )?;
        if changed == 0 {
            return Err(not_found(&entity.id));
        }

        fetch(conn, &entity.id)?.ok_or_else(|| not_found(&entity.id))
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connected(&guard)?;

        let changed = conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(not_found(id));
        }
        tracing::debug!(%id, "product deleted");
        Ok(())
    }
}
