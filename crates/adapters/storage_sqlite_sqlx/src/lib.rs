//! # panstock-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`StockRepository`](panstock_app::ports::StockRepository)
//!   port trait defined in `panstock-app`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (embedded sqlx migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `panstock-app` (for the port trait) and `panstock-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod error;
pub mod pool;
pub mod stock_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use stock_repo::SqliteStockRepository;
