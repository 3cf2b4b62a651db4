//! `SQLite` implementation of [`StockRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use panstock_app::ports::StockRepository;
use panstock_domain::error::StockError;
use panstock_domain::id::ItemId;
use panstock_domain::supply_item::SupplyItem;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`SupplyItem`].
struct Wrapper(SupplyItem);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("nombre")?;
        let quantity: i64 = row.try_get("cantidad")?;
        let unit: String = row.try_get("unidad")?;

        let id = ItemId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(SupplyItem {
            id,
            name,
            quantity,
            unit,
        }))
    }
}

const INSERT: &str = "INSERT INTO stock (id, nombre, cantidad, unidad) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM stock WHERE id = ?";
// rowid order preserves insertion order; the view renders rows as returned.
const SELECT_ALL: &str = "SELECT * FROM stock ORDER BY rowid";
const UPDATE: &str = "UPDATE stock SET nombre = ?, cantidad = ?, unidad = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM stock WHERE id = ?";

/// `SQLite`-backed stock repository.
pub struct SqliteStockRepository {
    pool: SqlitePool,
}

impl SqliteStockRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StockRepository for SqliteStockRepository {
    fn create(
        &self,
        item: SupplyItem,
    ) -> impl Future<Output = Result<SupplyItem, StockError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(item.id.to_string())
                .bind(&item.name)
                .bind(item.quantity)
                .bind(&item.unit)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(item)
        }
    }

    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<SupplyItem>, StockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<SupplyItem>, StockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        item: SupplyItem,
    ) -> impl Future<Output = Result<SupplyItem, StockError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&item.name)
                .bind(item.quantity)
                .bind(&item.unit)
                .bind(item.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(item)
        }
    }

    fn delete(&self, id: ItemId) -> impl Future<Output = Result<(), StockError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
