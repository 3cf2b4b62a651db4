//! Stock service — use-cases for managing supply items.

use panstock_domain::error::{NotFoundError, StockError, ValidationError};
use panstock_domain::id::ItemId;
use panstock_domain::supply_item::SupplyItem;

use crate::ports::StockRepository;

/// Application service for supply item CRUD operations.
pub struct StockService<R> {
    repo: R,
}

impl<R: StockRepository> StockService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new supply item after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_item(&self, item: SupplyItem) -> Result<SupplyItem, StockError> {
        item.validate()?;
        tracing::debug!(name = %item.name, quantity = item.quantity, "creating supply item");
        self.repo.create(item).await
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_item(&self, id: ItemId) -> Result<SupplyItem, StockError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "SupplyItem",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_items(&self) -> Result<Vec<SupplyItem>, StockError> {
        self.repo.get_all().await
    }

    /// Replace the quantity of an existing item.
    ///
    /// This is the only update the backend supports; name and unit are
    /// immutable once created.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::Validation`] when `quantity` is not positive,
    /// [`StockError::NotFound`] when the item does not exist, or a storage
    /// error from the repository.
    pub async fn set_quantity(&self, id: ItemId, quantity: i64) -> Result<SupplyItem, StockError> {
        if quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity.into());
        }
        let mut item = self.get_item(id).await?;
        tracing::debug!(name = %item.name, from = item.quantity, to = quantity, "updating quantity");
        item.quantity = quantity;
        self.repo.update(item).await
    }

    /// Delete an item by id. Unknown ids succeed silently.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_item(&self, id: ItemId) -> Result<(), StockError> {
        tracing::debug!(%id, "deleting supply item");
        self.repo.delete(id).await
    }
}
