//! # Invoice Repository
//!
//! Database operations for invoice headers and their line items. This is the
//! only repository with a multi-step write protocol, so every write runs
//! inside an explicit transaction.
//!
//! ## Write Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Invoice Write Paths                          │
//! │                                                                 │
//! │  CREATE                      UPDATE                             │
//! │  ──────                      ──────                             │
//! │  1. BEGIN                    1. BEGIN                           │
//! │  2. INSERT header            2. UPDATE header (0 rows → fail)   │
//! │  3. id = last_insert_rowid   3. DELETE all existing lines       │
//! │  4. INSERT each line         4. INSERT each submitted line      │
//! │  5. COMMIT                   5. COMMIT                          │
//! │                                                                 │
//! │  DELETE                                                         │
//! │  ──────                                                         │
//! │  1. BEGIN                                                       │
//! │  2. DELETE lines, then header (0 header rows → fail)            │
//! │  3. COMMIT                                                      │
//! │                                                                 │
//! │  Any failure at any step rolls back the whole transaction:      │
//! │  a half-written invoice (header without its lines, or lines     │
//! │  without a header) is never observable.                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Replacement Semantics
//! Updates replace the full line set (delete-all-then-reinsert) instead of
//! diffing old vs. new. Line ids are reassigned on every update; nothing
//! external references them.

use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use billing_core::{Invoice, InvoiceItem, NewInvoice, NewInvoiceLine};

/// Repository for invoice database operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }

    // =========================================================================
    // Read Path
    // =========================================================================

    /// Lists all invoice headers, newest first.
    pub async fn list(&self) -> DbResult<Vec<Invoice>> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, customer_name, created_at, tax, total
            FROM invoices
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    /// Gets an invoice header by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Invoice))` - Invoice found
    /// * `Ok(None)` - Invoice not found
    pub async fn get(&self, id: i64) -> DbResult<Option<Invoice>> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, customer_name, created_at, tax, total
            FROM invoices
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    /// Gets all line items for an invoice, in submitted order.
    ///
    /// Reading header and lines is not one transaction; a concurrent
    /// update/delete can interleave between the two reads. Tolerated.
    pub async fn items_for(&self, invoice_id: i64) -> DbResult<Vec<InvoiceItem>> {
        let items = sqlx::query_as::<_, InvoiceItem>(
            r#"
            SELECT id, invoice_id, item_id, quantity, price
            FROM invoice_items
            WHERE invoice_id = ?1
            ORDER BY id
            "#,
        )
        .bind(invoice_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    // =========================================================================
    // Write Path (transactional)
    // =========================================================================

    /// Creates an invoice header plus its line items atomically.
    ///
    /// The id is returned only after a successful commit; on any failure the
    /// transaction is rolled back and nothing is visible.
    pub async fn create(&self, new: &NewInvoice) -> DbResult<i64> {
        debug!(customer = %new.customer_name, lines = new.items.len(), "Creating invoice");

        let mut tx = self.pool.begin().await?;

        match Self::insert_invoice(&mut tx, new).await {
            Ok(invoice_id) => {
                tx.commit().await?;
                debug!(invoice_id, "Invoice created");
                Ok(invoice_id)
            }
            Err(e) => {
                Self::rollback(tx).await;
                Err(e)
            }
        }
    }

    /// Updates an invoice's mutable header fields and replaces its full line
    /// set, atomically.
    ///
    /// `created_at` is never touched. A missing invoice id fails with
    /// `DbError::NotFound` and leaves the store unchanged.
    pub async fn update(&self, id: i64, new: &NewInvoice) -> DbResult<()> {
        debug!(id, lines = new.items.len(), "Updating invoice");

        let mut tx = self.pool.begin().await?;

        match Self::replace_invoice(&mut tx, id, new).await {
            Ok(()) => {
                tx.commit().await?;
                debug!(id, "Invoice updated");
                Ok(())
            }
            Err(e) => {
                Self::rollback(tx).await;
                Err(e)
            }
        }
    }

    /// Deletes an invoice and all its line items atomically.
    ///
    /// Lines go first, then the header; the foreign key from lines to the
    /// header forbids the opposite order.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting invoice");

        let mut tx = self.pool.begin().await?;

        match Self::remove_invoice(&mut tx, id).await {
            Ok(()) => {
                tx.commit().await?;
                debug!(id, "Invoice deleted");
                Ok(())
            }
            Err(e) => {
                Self::rollback(tx).await;
                Err(e)
            }
        }
    }

    // =========================================================================
    // Transaction Steps
    // =========================================================================

    async fn insert_invoice(
        tx: &mut Transaction<'_, Sqlite>,
        new: &NewInvoice,
    ) -> DbResult<i64> {
        // created_at is assigned here, once; updates never write it.
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO invoices (customer_name, created_at, tax, total)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new.customer_name)
        .bind(now)
        .bind(new.tax)
        .bind(new.total)
        .execute(&mut **tx)
        .await?;

        let invoice_id = result.last_insert_rowid();
        Self::insert_lines(tx, invoice_id, &new.items).await?;

        Ok(invoice_id)
    }

    async fn replace_invoice(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        new: &NewInvoice,
    ) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE invoices SET
                customer_name = ?2,
                tax = ?3,
                total = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&new.customer_name)
        .bind(new.tax)
        .bind(new.total)
        .execute(&mut **tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Invoice", id));
        }

        // Full replacement: drop every prior line before inserting the new
        // set, so lines never accumulate and never orphan.
        sqlx::query("DELETE FROM invoice_items WHERE invoice_id = ?1")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Self::insert_lines(tx, id, &new.items).await?;

        Ok(())
    }

    async fn remove_invoice(tx: &mut Transaction<'_, Sqlite>, id: i64) -> DbResult<()> {
        sqlx::query("DELETE FROM invoice_items WHERE invoice_id = ?1")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        let result = sqlx::query("DELETE FROM invoices WHERE id = ?1")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Invoice", id));
        }

        Ok(())
    }

    async fn insert_lines(
        tx: &mut Transaction<'_, Sqlite>,
        invoice_id: i64,
        lines: &[NewInvoiceLine],
    ) -> DbResult<()> {
        for line in lines {
            sqlx::query(
                r#"
                INSERT INTO invoice_items (invoice_id, item_id, quantity, price)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(invoice_id)
            .bind(line.item_id)
            .bind(line.quantity)
            .bind(line.price)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Explicit rollback before surfacing the original error. A failed
    /// rollback is logged; the connection drop would undo the transaction
    /// anyway.
    async fn rollback(tx: Transaction<'_, Sqlite>) {
        if let Err(e) = tx.rollback().await {
            warn!(error = %e, "Transaction rollback failed");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn line(item_id: i64, quantity: i64, price: f64) -> NewInvoiceLine {
        NewInvoiceLine {
            item_id,
            quantity,
            price,
        }
    }

    fn alice_order() -> NewInvoice {
        NewInvoice {
            customer_name: "Alice".to_string(),
            tax: 1.5,
            total: 21.5,
            items: vec![line(3, 2, 10.0)],
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn line_count(db: &Database) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM invoice_items")
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_writes_header_and_all_lines() {
        let db = test_db().await;
        let repo = db.invoices();

        let new = NewInvoice {
            customer_name: "Bob".to_string(),
            tax: 2.0,
            total: 30.0,
            items: vec![line(1, 1, 12.0), line(2, 2, 8.0), line(3, 1, 2.0)],
        };

        let id = repo.create(&new).await.unwrap();

        let header = repo.get(id).await.unwrap().unwrap();
        assert_eq!(header.customer_name, "Bob");

        let items = repo.items_for(id).await.unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.invoice_id == id));
        // Submitted order is preserved.
        assert_eq!(
            items.iter().map(|i| i.item_id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn create_captures_submitted_prices() {
        let db = test_db().await;
        let repo = db.invoices();

        let id = repo.create(&alice_order()).await.unwrap();
        let items = repo.items_for(id).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_id, 3);
        assert_eq!(items[0].quantity, 2);
        assert!((items[0].price - 10.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn list_orders_newest_first() {
        let db = test_db().await;
        let repo = db.invoices();

        let first = repo.create(&alice_order()).await.unwrap();
        // created_at has sub-second precision, so two immediate inserts
        // still sort deterministically.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let mut second_order = alice_order();
        second_order.customer_name = "Bob".to_string();
        let second = repo.create(&second_order).await.unwrap();

        let invoices = repo.list().await.unwrap();
        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0].id, second);
        assert_eq!(invoices[1].id, first);
    }

    #[tokio::test]
    async fn update_replaces_line_set_fully() {
        let db = test_db().await;
        let repo = db.invoices();

        let id = repo.create(&alice_order()).await.unwrap();
        let old_ids: Vec<i64> = repo
            .items_for(id)
            .await
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();

        let replacement = NewInvoice {
            customer_name: "Alice".to_string(),
            tax: 3.0,
            total: 40.0,
            items: vec![line(5, 1, 20.0), line(6, 2, 10.0)],
        };
        repo.update(id, &replacement).await.unwrap();

        let items = repo.items_for(id).await.unwrap();
        assert_eq!(items.len(), 2);
        // Old line ids are gone; the whole set was reinserted.
        assert!(items.iter().all(|i| !old_ids.contains(&i.id)));
        assert_eq!(
            items.iter().map(|i| i.item_id).collect::<Vec<_>>(),
            vec![5, 6]
        );

        let header = repo.get(id).await.unwrap().unwrap();
        assert!((header.total - 40.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn update_never_touches_created_at() {
        let db = test_db().await;
        let repo = db.invoices();

        let id = repo.create(&alice_order()).await.unwrap();
        let before = repo.get(id).await.unwrap().unwrap().created_at;

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        repo.update(id, &alice_order()).await.unwrap();

        let after = repo.get(id).await.unwrap().unwrap().created_at;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn update_missing_invoice_rolls_back_untouched() {
        let db = test_db().await;
        let repo = db.invoices();

        let existing = repo.create(&alice_order()).await.unwrap();
        let lines_before = line_count(&db).await;

        let err = repo.update(9999, &alice_order()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        // Nothing changed anywhere: the failed transaction left no trace.
        assert_eq!(line_count(&db).await, lines_before);
        assert_eq!(repo.items_for(existing).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_header_and_lines() {
        let db = test_db().await;
        let repo = db.invoices();

        let id = repo.create(&alice_order()).await.unwrap();
        repo.delete(id).await.unwrap();

        assert!(repo.get(id).await.unwrap().is_none());
        assert!(repo.items_for(id).await.unwrap().is_empty());
        assert_eq!(line_count(&db).await, 0);
    }

    #[tokio::test]
    async fn delete_missing_invoice_is_not_found() {
        let db = test_db().await;

        let err = db.invoices().delete(9999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
