//! # billing-db: SQLite Database Layer
//!
//! All database access for the billing backend lives here: the connection
//! pool, embedded migrations, and the item/invoice repositories.
//!
//! ## Usage
//! ```rust,ignore
//! let config = DbConfig::new("./billing.db");
//! let db = Database::new(config).await?;
//!
//! let items = db.items().list().await?;
//! let invoice_id = db.invoices().create(&new_invoice).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::invoice::InvoiceRepository;
pub use repository::item::ItemRepository;
