//! # Item Repository
//!
//! Database operations for menu items. Every operation here is a single
//! statement; nothing item-related needs a transaction.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use billing_core::{Item, NewItem};

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
/// let item = repo.insert(&new_item).await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Lists all items in store-default order.
    ///
    /// A row that fails to decode fails the whole call; the listing is never
    /// silently shortened.
    pub async fn list(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, type, price, image_url
            FROM items
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get(&self, id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, type, price, image_url
            FROM items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts a new item and returns it with the store-assigned id.
    pub async fn insert(&self, new: &NewItem) -> DbResult<Item> {
        debug!(name = %new.name, "Inserting item");

        let result = sqlx::query(
            r#"
            INSERT INTO items (name, type, price, image_url)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new.name)
        .bind(&new.item_type)
        .bind(new.price)
        .bind(&new.image_url)
        .execute(&self.pool)
        .await?;

        Ok(Item {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            item_type: new.item_type.clone(),
            price: new.price,
            image_url: new.image_url.clone(),
        })
    }

    /// Full-row overwrite of an existing item.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Item doesn't exist
    pub async fn update(&self, id: i64, new: &NewItem) -> DbResult<()> {
        debug!(id, "Updating item");

        let result = sqlx::query(
            r#"
            UPDATE items SET
                name = ?2,
                type = ?3,
                price = ?4,
                image_url = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&new.name)
        .bind(&new.item_type)
        .bind(new.price)
        .bind(&new.image_url)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Deletes an item by id.
    ///
    /// Historical invoice lines keep their frozen price and item_id, so
    /// deleting an item never touches existing invoices.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting item");

        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
